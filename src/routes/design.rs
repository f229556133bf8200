use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::design::{CatalogByType, DesignRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Taco,
    response::ApiResponse,
    services::design_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_design))
        .route("/", post(process_design))
}

#[utoipa::path(
    get,
    path = "/api/design",
    responses(
        (status = 200, description = "Ingredient catalog grouped by type", body = ApiResponse<CatalogByType>)
    ),
    tag = "Design"
)]
pub async fn show_design(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<ApiResponse<CatalogByType>>> {
    let resp = design_service::ingredient_catalog(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/design",
    request_body = DesignRequest,
    responses(
        (status = 200, description = "Taco created and added to the open order", body = ApiResponse<Taco>),
        (status = 422, description = "Blank name, no ingredients, or unknown ingredient id")
    ),
    tag = "Design"
)]
pub async fn process_design(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<DesignRequest>,
) -> AppResult<Json<ApiResponse<Taco>>> {
    let resp = design_service::submit_design(&state, &user, payload).await?;
    Ok(Json(resp))
}
