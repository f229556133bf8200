use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientType {
    Wrap,
    Protein,
    Veggies,
    Cheese,
    Sauce,
}

impl IngredientType {
    pub const ALL: [IngredientType; 5] = [
        IngredientType::Wrap,
        IngredientType::Protein,
        IngredientType::Veggies,
        IngredientType::Cheese,
        IngredientType::Sauce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientType::Wrap => "WRAP",
            IngredientType::Protein => "PROTEIN",
            IngredientType::Veggies => "VEGGIES",
            IngredientType::Cheese => "CHEESE",
            IngredientType::Sauce => "SAUCE",
        }
    }

    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "WRAP" => Ok(IngredientType::Wrap),
            "PROTEIN" => Ok(IngredientType::Protein),
            "VEGGIES" => Ok(IngredientType::Veggies),
            "CHEESE" => Ok(IngredientType::Cheese),
            "SAUCE" => Ok(IngredientType::Sauce),
            other => Err(anyhow::anyhow!("unknown ingredient type: {other}")),
        }
    }
}

/// Catalog reference data. Ids are stable short codes ("FLTO"); rows are
/// seeded at deployment and never mutated by the workflow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
}

impl Ingredient {
    pub fn new(id: &str, name: &str, ingredient_type: IngredientType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ingredient_type,
        }
    }
}

/// The ten-ingredient catalog every deployment starts from.
pub fn builtin_catalog() -> Vec<Ingredient> {
    vec![
        Ingredient::new("FLTO", "Flour Tortilla", IngredientType::Wrap),
        Ingredient::new("COTO", "Corn Tortilla", IngredientType::Wrap),
        Ingredient::new("GRBF", "Ground Beef", IngredientType::Protein),
        Ingredient::new("CARN", "Carnitas", IngredientType::Protein),
        Ingredient::new("TMTO", "Diced Tomatoes", IngredientType::Veggies),
        Ingredient::new("LETC", "Lettuce", IngredientType::Veggies),
        Ingredient::new("CHED", "Cheddar", IngredientType::Cheese),
        Ingredient::new("JACK", "Monterrey Jack", IngredientType::Cheese),
        Ingredient::new("SLSA", "Salsa", IngredientType::Sauce),
        Ingredient::new("SRCR", "Sour Cream", IngredientType::Sauce),
    ]
}

/// A named bundle of ingredient references, immutable once persisted.
/// `id` stays `None` until a repository assigns one; `save` keeps an already
/// assigned id as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Taco {
    pub id: Option<Uuid>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Ingredient ids in the order the user picked them.
    pub ingredients: Vec<String>,
}

/// A finalized checkout unit. Tacos are referenced, not owned: each taco is
/// persisted independently and merely linked here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub tacos: Vec<Uuid>,
    pub delivery_name: String,
    pub delivery_street: String,
    pub delivery_city: String,
    pub delivery_state: String,
    pub delivery_zip: String,
    pub cc_number: String,
    pub cc_expiration: String,
    pub cc_cvv: String,
}

/// The session-scoped Open order: a plain value the workflow passes in and
/// out of each step. It only becomes an `Order` row at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DraftOrder {
    pub tacos: Vec<Uuid>,
}

impl DraftOrder {
    /// Appends a taco reference. Call order is preserved; duplicates are not
    /// collapsed and there is no upper bound.
    pub fn add_design(&mut self, taco_id: Uuid) {
        self.tacos.push(taco_id);
    }

    pub fn is_empty(&self) -> bool {
        self.tacos.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub fullname: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_order_preserves_call_order_and_duplicates() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let mut draft = DraftOrder::default();
        draft.add_design(a);
        draft.add_design(b);
        draft.add_design(a);

        assert_eq!(draft.tacos, vec![a, b, a]);
    }

    #[test]
    fn ingredient_type_round_trips_through_text() {
        for ty in IngredientType::ALL {
            assert_eq!(IngredientType::parse(ty.as_str()).unwrap(), ty);
        }
        assert!(IngredientType::parse("GARNISH").is_err());
    }
}
