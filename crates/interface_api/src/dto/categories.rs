//! Category DTOs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}
