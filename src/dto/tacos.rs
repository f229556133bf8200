use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::IngredientType;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
}

/// A taco with its ingredient references resolved to names.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TacoSummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub ingredients: Vec<IngredientSummary>,
}

/// Navigation link computed alongside the payload, not baked into it.
#[derive(Debug, Serialize, ToSchema)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: &str) -> Self {
        Self {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentTacos {
    pub tacos: Vec<TacoSummary>,
    pub links: Vec<Link>,
}
