use taco_cloud_api::{
    dto::design::DesignRequest,
    dto::orders::CheckoutRequest,
    error::AppError,
    middleware::auth::AuthUser,
    models::{Taco, builtin_catalog},
    repository::Repositories,
    services::{design_service, order_service},
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

fn valid_checkout() -> CheckoutRequest {
    CheckoutRequest {
        delivery_name: "Demo User".into(),
        delivery_street: "1234 Culinary Blvd".into(),
        delivery_city: "Austin".into(),
        delivery_state: "TX".into(),
        delivery_zip: "78701".into(),
        cc_number: "4111111111111111".into(),
        cc_expiration: "10/28".into(),
        cc_cvv: "123".into(),
    }
}

async fn submit(state: &AppState, user: &AuthUser, name: &str, ingredients: &[&str]) -> Taco {
    let resp = design_service::submit_design(
        state,
        user,
        DesignRequest {
            name: name.into(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        },
    )
    .await
    .expect("design should succeed");
    resp.data.expect("design data")
}

#[tokio::test]
async fn design_assigns_id_and_preserves_ingredient_order() {
    let state = setup_state().await;
    let user = test_user();

    let taco = submit(&state, &user, "Beef Taco", &["FLTO", "GRBF"]).await;

    assert!(taco.id.is_some());
    assert_eq!(taco.name, "Beef Taco");
    assert_eq!(taco.ingredients, vec!["FLTO", "GRBF"]);
}

#[tokio::test]
async fn design_with_empty_ingredients_fails_and_persists_nothing() {
    let state = setup_state().await;
    let user = test_user();

    let result = design_service::submit_design(
        &state,
        &user,
        DesignRequest {
            name: "Bad Taco".into(),
            ingredients: vec![],
        },
    )
    .await;

    match result {
        Err(AppError::Validation(fields)) => {
            assert!(fields.iter().any(|f| f.field == "ingredients"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let recent = state.repos.tacos.find_recent(12).await.unwrap();
    assert!(recent.is_empty(), "nothing should have been persisted");
}

#[tokio::test]
async fn design_with_blank_name_fails() {
    let state = setup_state().await;
    let user = test_user();

    let result = design_service::submit_design(
        &state,
        &user,
        DesignRequest {
            name: "   ".into(),
            ingredients: vec!["FLTO".into()],
        },
    )
    .await;

    match result {
        Err(AppError::Validation(fields)) => {
            assert!(fields.iter().any(|f| f.field == "name"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn design_with_unknown_ingredient_fails() {
    let state = setup_state().await;
    let user = test_user();

    let result = design_service::submit_design(
        &state,
        &user,
        DesignRequest {
            name: "Mystery Taco".into(),
            ingredients: vec!["FLTO".into(), "XXXX".into()],
        },
    )
    .await;

    match result {
        Err(AppError::Validation(fields)) => {
            assert!(fields.iter().any(|f| f.message.contains("XXXX")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn duplicate_submissions_create_distinct_records() {
    let state = setup_state().await;
    let user = test_user();

    let first = submit(&state, &user, "Repeat", &["FLTO", "GRBF"]).await;
    let second = submit(&state, &user, "Repeat", &["FLTO", "GRBF"]).await;

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn open_order_accumulates_designs_in_submission_order() {
    let state = setup_state().await;
    let user = test_user();

    let a = submit(&state, &user, "First", &["FLTO", "GRBF"]).await;
    let b = submit(&state, &user, "Second", &["COTO", "CARN"]).await;
    let c = submit(&state, &user, "Third", &["FLTO", "CHED"]).await;

    let draft = state.sessions.load(user.user_id).await;
    assert_eq!(
        draft.tacos,
        vec![a.id.unwrap(), b.id.unwrap(), c.id.unwrap()]
    );

    let current = order_service::current_order(&state, &user)
        .await
        .unwrap()
        .data
        .unwrap();
    let names: Vec<&str> = current.tacos.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn checkout_with_no_tacos_fails_and_order_stays_open() {
    let state = setup_state().await;
    let user = test_user();

    let result = order_service::checkout(&state, &user, valid_checkout()).await;
    match result {
        Err(AppError::Validation(fields)) => {
            assert!(fields.iter().any(|f| f.field == "tacos"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // The session is still usable: a design added now shows up in the draft.
    let taco = submit(&state, &user, "Late Taco", &["FLTO"]).await;
    let draft = state.sessions.load(user.user_id).await;
    assert_eq!(draft.tacos, vec![taco.id.unwrap()]);
}

#[tokio::test]
async fn checkout_with_missing_fields_reports_each_field_and_keeps_draft() {
    let state = setup_state().await;
    let user = test_user();
    submit(&state, &user, "Kept Taco", &["FLTO", "GRBF"]).await;

    let payload = CheckoutRequest {
        delivery_name: "".into(),
        delivery_street: "".into(),
        delivery_city: "Austin".into(),
        delivery_state: "TX".into(),
        delivery_zip: "78701".into(),
        cc_number: "1234".into(),
        cc_expiration: "13/28".into(),
        cc_cvv: "12".into(),
    };
    let result = order_service::checkout(&state, &user, payload).await;

    match result {
        Err(AppError::Validation(fields)) => {
            let named: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
            for expected in [
                "delivery_name",
                "delivery_street",
                "cc_number",
                "cc_expiration",
                "cc_cvv",
            ] {
                assert!(named.contains(&expected), "missing field error: {expected}");
            }
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // Draft untouched, nothing persisted.
    let draft = state.sessions.load(user.user_id).await;
    assert_eq!(draft.tacos.len(), 1);
    let placed = state
        .repos
        .orders
        .find_recent_by_user(user.user_id, 10)
        .await
        .unwrap();
    assert!(placed.is_empty());
}

#[tokio::test]
async fn checkout_places_order_and_resets_session() {
    let state = setup_state().await;
    let user = test_user();

    let taco = submit(&state, &user, "Beef Taco", &["FLTO", "GRBF"]).await;

    let placed = order_service::checkout(&state, &user, valid_checkout())
        .await
        .expect("checkout should succeed")
        .data
        .expect("order data");

    assert!(placed.id.is_some());
    assert_eq!(placed.user_id, user.user_id);
    assert_eq!(placed.tacos, vec![taco.id.unwrap()]);

    // Session draft is gone; the next interaction starts fresh.
    let draft = state.sessions.load(user.user_id).await;
    assert!(draft.is_empty());

    // The placed order shows up in the user's history.
    let history = state
        .repos
        .orders
        .find_recent_by_user(user.user_id, 10)
        .await
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, placed.id);
}

#[tokio::test]
async fn recent_orders_page_of_two_returns_newest_first() {
    let state = setup_state().await;
    let user = test_user();

    let mut placed_ids = Vec::new();
    for i in 0..5 {
        submit(&state, &user, &format!("Taco {i}"), &["FLTO", "GRBF"]).await;
        let placed = order_service::checkout(&state, &user, valid_checkout())
            .await
            .expect("checkout should succeed")
            .data
            .expect("order data");
        placed_ids.push(placed.id.unwrap());
    }

    let page = state
        .repos
        .orders
        .find_recent_by_user(user.user_id, 2)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, Some(placed_ids[4]));
    assert_eq!(page[1].id, Some(placed_ids[3]));
    assert!(page[0].placed_at >= page[1].placed_at);
}

#[tokio::test]
async fn list_recent_uses_configured_page_size() {
    let state = setup_state().await;
    let user = test_user();

    for i in 0..3 {
        submit(&state, &user, &format!("Taco {i}"), &["FLTO"]).await;
        order_service::checkout(&state, &user, valid_checkout())
            .await
            .expect("checkout should succeed");
    }

    let resp = order_service::list_recent(&state, &user, Some(2))
        .await
        .unwrap();
    let list = resp.data.unwrap();
    assert_eq!(list.items.len(), 2);

    let meta = resp.meta.unwrap();
    assert_eq!(meta.per_page, Some(2));
}

#[tokio::test]
async fn sessions_are_confined_to_their_user() {
    let state = setup_state().await;
    let alice = test_user();
    let bob = test_user();

    submit(&state, &alice, "Alice Taco", &["FLTO"]).await;

    let bob_draft = state.sessions.load(bob.user_id).await;
    assert!(bob_draft.is_empty());

    let alice_draft = state.sessions.load(alice.user_id).await;
    assert_eq!(alice_draft.tacos.len(), 1);
}
