use std::collections::HashMap;

use crate::{
    dto::tacos::{IngredientSummary, TacoSummary},
    error::AppResult,
    models::{Ingredient, Taco},
    repository::Repositories,
    state::AppState,
};

/// How many tacos the public recent feed returns.
pub const RECENT_LIMIT: i64 = 12;

/// Resolves ingredient references to names for display. Referential
/// integrity is enforced at creation, so an id missing from the catalog can
/// only mean the catalog row was removed; such ids are skipped.
pub async fn summarize(repos: &Repositories, tacos: Vec<Taco>) -> AppResult<Vec<TacoSummary>> {
    let catalog: HashMap<String, Ingredient> = repos
        .ingredients
        .find_all()
        .await?
        .into_iter()
        .map(|i| (i.id.clone(), i))
        .collect();

    Ok(tacos
        .into_iter()
        .filter_map(|taco| {
            let id = taco.id?;
            let ingredients = taco
                .ingredients
                .iter()
                .filter_map(|ingredient_id| catalog.get(ingredient_id))
                .map(|ingredient| IngredientSummary {
                    name: ingredient.name.clone(),
                    ingredient_type: ingredient.ingredient_type,
                })
                .collect();
            Some(TacoSummary {
                id,
                name: taco.name,
                created_at: taco.created_at,
                ingredients,
            })
        })
        .collect())
}

/// The read-only recent-tacos feed: newest designs, limit twelve, with
/// resolved ingredient names. An empty store is an empty list, not an error.
pub async fn recent_tacos(state: &AppState) -> AppResult<Vec<TacoSummary>> {
    let tacos = state.repos.tacos.find_recent(RECENT_LIMIT).await?;
    summarize(&state.repos, tacos).await
}
