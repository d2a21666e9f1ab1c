//! Shared entity lifecycle state
//!
//! Every entity embeds a [`Lifecycle`] rather than inheriting from a base
//! type: creation timestamp, last-update timestamp, and the active flag used
//! for soft deletion. Deleted entities are never physically removed; read
//! paths decide explicitly whether to include inactive rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle fields common to all entities
///
/// Invariant: once `is_active` is false, `last_update` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lifecycle {
    created_at: DateTime<Utc>,
    last_update: Option<DateTime<Utc>>,
    is_active: bool,
}

impl Lifecycle {
    /// Starts a fresh lifecycle: created now, active, never updated
    pub fn start() -> Self {
        Self {
            created_at: Utc::now(),
            last_update: None,
            is_active: true,
        }
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp, if the entity was ever touched
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    /// Returns true while the entity has not been soft-deleted
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Soft-deletes the entity: marks it inactive and stamps `last_update`.
    ///
    /// Calling this again refreshes the stamp; the entity stays inactive.
    /// There is no resurrection operation.
    pub fn delete(&mut self) {
        self.is_active = false;
        self.last_update = Some(Utc::now());
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::start()
    }
}
