use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::tacos::{Link, RecentTacos},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::taco_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/recent", get(recent_tacos))
}

#[utoipa::path(
    get,
    path = "/api/tacos/recent",
    responses(
        (status = 200, description = "Recently designed tacos, newest first", body = ApiResponse<RecentTacos>)
    ),
    tag = "Tacos"
)]
pub async fn recent_tacos(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RecentTacos>>> {
    let tacos = taco_service::recent_tacos(&state).await?;

    // Navigation links are assembled here, next to the routing table they
    // point into.
    let links = vec![
        Link::new("self", "/api/tacos/recent"),
        Link::new("recents", "/api/tacos/recent"),
    ];

    Ok(Json(ApiResponse::success(
        "Ok",
        RecentTacos { tacos, links },
        Some(Meta::empty()),
    )))
}
