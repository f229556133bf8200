use chrono::Utc;
use taco_cloud_api::{
    models::{Ingredient, IngredientType, Taco, builtin_catalog},
    repository::Repositories,
};
use uuid::Uuid;

// Contract checks run against the in-memory backend; the SQL backends honor
// the same observable behavior via their shared trait definitions.

#[tokio::test]
async fn save_assigns_id_once_and_keeps_it() {
    let repos = Repositories::in_memory();

    let taco = Taco {
        id: None,
        name: "Contract Taco".into(),
        created_at: Utc::now(),
        ingredients: vec!["FLTO".into()],
    };
    let saved = repos.tacos.save(taco).await.unwrap();
    let id = saved.id.expect("save assigns an id");

    // Saving again with the id already set keeps it.
    let resaved = repos.tacos.save(saved).await.unwrap();
    assert_eq!(resaved.id, Some(id));
}

#[tokio::test]
async fn find_by_id_signals_absence_with_none() {
    let repos = Repositories::in_memory();

    assert!(repos.tacos.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repos.ingredients.find_by_id("NOPE").await.unwrap().is_none());
    assert!(repos.users.find_by_username("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn ingredient_save_is_an_upsert() {
    let repos = Repositories::in_memory();
    for ingredient in builtin_catalog() {
        repos.ingredients.save(ingredient).await.unwrap();
    }

    repos
        .ingredients
        .save(Ingredient::new("FLTO", "Whole Wheat Tortilla", IngredientType::Wrap))
        .await
        .unwrap();

    let all = repos.ingredients.find_all().await.unwrap();
    assert_eq!(all.len(), 10, "upsert must not duplicate the row");

    let flto = repos.ingredients.find_by_id("FLTO").await.unwrap().unwrap();
    assert_eq!(flto.name, "Whole Wheat Tortilla");
}

#[tokio::test]
async fn find_recent_respects_limit() {
    let repos = Repositories::in_memory();

    for i in 0..5 {
        repos
            .tacos
            .save(Taco {
                id: None,
                name: format!("Taco {i}"),
                created_at: Utc::now(),
                ingredients: vec!["FLTO".into()],
            })
            .await
            .unwrap();
    }

    let recent = repos.tacos.find_recent(3).await.unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].name, "Taco 4");
}
