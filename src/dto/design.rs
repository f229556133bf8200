use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Ingredient, IngredientType};

/// One design-form submission: a taco name plus the picked ingredient ids in
/// pick order.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DesignRequest {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// The catalog partitioned by ingredient type for the design form.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct CatalogByType {
    pub wrap: Vec<Ingredient>,
    pub protein: Vec<Ingredient>,
    pub veggies: Vec<Ingredient>,
    pub cheese: Vec<Ingredient>,
    pub sauce: Vec<Ingredient>,
}

impl CatalogByType {
    /// Pure partition over the full catalog; relative order within a bucket
    /// follows the input and carries no further guarantee.
    pub fn partition(ingredients: Vec<Ingredient>) -> Self {
        let mut catalog = CatalogByType::default();
        for ingredient in ingredients {
            match ingredient.ingredient_type {
                IngredientType::Wrap => catalog.wrap.push(ingredient),
                IngredientType::Protein => catalog.protein.push(ingredient),
                IngredientType::Veggies => catalog.veggies.push(ingredient),
                IngredientType::Cheese => catalog.cheese.push(ingredient),
                IngredientType::Sauce => catalog.sauce.push(ingredient),
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::builtin_catalog;

    #[test]
    fn partition_buckets_every_ingredient_once() {
        let catalog = CatalogByType::partition(builtin_catalog());
        assert_eq!(catalog.wrap.len(), 2);
        assert_eq!(catalog.protein.len(), 2);
        assert_eq!(catalog.veggies.len(), 2);
        assert_eq!(catalog.cheese.len(), 2);
        assert_eq!(catalog.sauce.len(), 2);
        assert!(catalog.wrap.iter().any(|i| i.id == "FLTO"));
    }
}
