use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::orders::{CheckoutRequest, CurrentOrder, OrderList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Order,
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/", post(process_order))
        .route("/current", get(current_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("per_page" = Option<i64>, Query, description = "Page size, defaults to the configured orders page size"),
    ),
    responses(
        (status = 200, description = "Recent orders, newest first", body = ApiResponse<OrderList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_recent(&state, &user, query.per_page).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/current",
    responses(
        (status = 200, description = "The session's open order", body = ApiResponse<CurrentOrder>)
    ),
    tag = "Orders"
)]
pub async fn current_order(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CurrentOrder>>> {
    let resp = order_service::current_order(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<Order>),
        (status = 422, description = "Empty order or missing delivery/payment fields")
    ),
    tag = "Orders"
)]
pub async fn process_order(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::checkout(&state, &user, payload).await?;
    Ok(Json(resp))
}
