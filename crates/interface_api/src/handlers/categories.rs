//! Category handlers

use axum::{extract::State, http::StatusCode, Json};

use core_kernel::Error;
use domain_ledger::Category;

use crate::dto::categories::CreateCategoryRequest;
use crate::dto::{CreatedResponse, SuccessBody};
use crate::error::ApiFailure;
use crate::AppState;

/// Creates a new category
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<SuccessBody<CreatedResponse>>), ApiFailure> {
    if let Some(error) = validate(&request) {
        return Err(ApiFailure::bad_request(error));
    }

    let category = Category::create(request.name);
    let id = category.id();
    state.categories.insert(category).await?;

    tracing::info!(category_id = %id, "category created");

    Ok((
        StatusCode::CREATED,
        Json(SuccessBody::new(CreatedResponse { id: *id.as_uuid() })),
    ))
}

fn validate(request: &CreateCategoryRequest) -> Option<Error> {
    if request.name.trim().is_empty() {
        return Some(Error::validation("Category name cannot be empty."));
    }
    if request.name.chars().count() > 200 {
        return Some(Error::validation("Category name cannot exceed 200 characters."));
    }
    None
}
