use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderListQuery {
    /// Page size for the recent-orders list; defaults to the configured
    /// orders page size.
    pub per_page: Option<i64>,
}
