use taco_cloud_api::{
    dto::design::DesignRequest,
    middleware::auth::AuthUser,
    models::builtin_catalog,
    repository::Repositories,
    services::{design_service, taco_service},
    state::AppState,
};
use uuid::Uuid;

async fn setup_state() -> AppState {
    let repos = Repositories::in_memory();
    for ingredient in builtin_catalog() {
        repos.ingredients.save(ingredient).await.expect("seed catalog");
    }
    AppState::new(repos, 20)
}

fn test_user() -> AuthUser {
    AuthUser {
        user_id: Uuid::new_v4(),
        username: "habanero".into(),
    }
}

async fn submit(state: &AppState, user: &AuthUser, name: &str, ingredients: &[&str]) {
    design_service::submit_design(
        state,
        user,
        DesignRequest {
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        },
    )
    .await
    .expect("design should succeed");
}

#[tokio::test]
async fn empty_store_yields_empty_feed() {
    // No catalog, no tacos: the feed is an empty list, not an error.
    let state = AppState::new(Repositories::in_memory(), 20);

    let tacos = taco_service::recent_tacos(&state).await.unwrap();
    assert!(tacos.is_empty());
}

#[tokio::test]
async fn feed_is_newest_first_with_resolved_names() {
    let state = setup_state().await;
    let user = test_user();

    submit(&state, &user, "Oldest", &["FLTO", "GRBF"]).await;
    submit(&state, &user, "Middle", &["COTO", "CARN"]).await;
    submit(&state, &user, "Newest", &["FLTO", "SLSA"]).await;

    let tacos = taco_service::recent_tacos(&state).await.unwrap();

    let names: Vec<&str> = tacos.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);

    let newest = &tacos[0];
    let ingredient_names: Vec<&str> = newest
        .ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(ingredient_names, vec!["Flour Tortilla", "Salsa"]);
}

#[tokio::test]
async fn feed_is_capped_at_twelve() {
    let state = setup_state().await;
    let user = test_user();

    for i in 0..15 {
        submit(&state, &user, &format!("Taco {i}"), &["FLTO"]).await;
    }

    let tacos = taco_service::recent_tacos(&state).await.unwrap();
    assert_eq!(tacos.len(), 12);
    assert_eq!(tacos[0].name, "Taco 14");
}
