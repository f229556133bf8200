use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::tacos::TacoSummary;
use crate::models::Order;

/// The checkout form: delivery address plus payment details. All fields are
/// required; validation reports every missing or malformed field at once.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub delivery_name: String,
    pub delivery_street: String,
    pub delivery_city: String,
    pub delivery_state: String,
    pub delivery_zip: String,
    pub cc_number: String,
    pub cc_expiration: String,
    pub cc_cvv: String,
}

/// The session's Open order, with taco references resolved for display.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentOrder {
    pub tacos: Vec<TacoSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
