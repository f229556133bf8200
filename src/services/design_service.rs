use chrono::Utc;

use crate::{
    dto::design::{CatalogByType, DesignRequest},
    error::{AppError, AppResult, FieldError},
    middleware::auth::AuthUser,
    models::Taco,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// The full catalog partitioned by type for the design form.
pub async fn ingredient_catalog(state: &AppState) -> AppResult<ApiResponse<CatalogByType>> {
    let ingredients = state.repos.ingredients.find_all().await?;
    Ok(ApiResponse::success(
        "Ok",
        CatalogByType::partition(ingredients),
        Some(Meta::empty()),
    ))
}

/// One design-form submission: validates, persists the taco, and appends it
/// to the caller's Open order. Every submission creates a new record, even
/// when its content matches an earlier design.
pub async fn submit_design(
    state: &AppState,
    user: &AuthUser,
    payload: DesignRequest,
) -> AppResult<ApiResponse<Taco>> {
    let mut errors: Vec<FieldError> = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if payload.ingredients.is_empty() {
        errors.push(FieldError::new(
            "ingredients",
            "Pick at least one ingredient",
        ));
    }
    for ingredient_id in &payload.ingredients {
        if state
            .repos
            .ingredients
            .find_by_id(ingredient_id)
            .await?
            .is_none()
        {
            errors.push(FieldError::new(
                "ingredients",
                format!("Unknown ingredient: {ingredient_id}"),
            ));
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let taco = Taco {
        id: None,
        name: payload.name,
        created_at: Utc::now(),
        ingredients: payload.ingredients,
    };
    let saved = state.repos.tacos.save(taco).await?;

    // The Open order is a value: load it, append, store it back.
    let mut draft = state.sessions.load(user.user_id).await;
    if let Some(taco_id) = saved.id {
        draft.add_design(taco_id);
    }
    state.sessions.store(user.user_id, draft).await;

    tracing::debug!(user_id = %user.user_id, taco = %saved.name, "design added to order");
    Ok(ApiResponse::success("Design created", saved, None))
}
