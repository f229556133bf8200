use taco_cloud_api::{
    dto::auth::RegisterRequest,
    error::AppError,
    repository::Repositories,
    services::auth_service,
    state::AppState,
};

fn register_payload(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.into(),
        password: "tacocloud".into(),
        fullname: "Demo User".into(),
        street: "1234 Culinary Blvd".into(),
        city: "Austin".into(),
        state: "TX".into(),
        zip: "78701".into(),
        phone_number: "512-555-1234".into(),
    }
}

#[tokio::test]
async fn register_creates_user_with_hashed_password() {
    let state = AppState::new(Repositories::in_memory(), 20);

    let resp = auth_service::register_user(&state, register_payload("habanero"))
        .await
        .expect("registration should succeed");
    let user = resp.data.expect("user data");

    assert_eq!(user.username, "habanero");
    assert_ne!(user.password_hash, "tacocloud");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn register_rejects_taken_username() {
    let state = AppState::new(Repositories::in_memory(), 20);

    auth_service::register_user(&state, register_payload("habanero"))
        .await
        .expect("first registration should succeed");

    let result = auth_service::register_user(&state, register_payload("habanero")).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn register_requires_username_and_password() {
    let state = AppState::new(Repositories::in_memory(), 20);

    let mut payload = register_payload("");
    payload.password = "  ".into();
    let result = auth_service::register_user(&state, payload).await;

    match result {
        Err(AppError::Validation(fields)) => {
            assert_eq!(fields.len(), 2);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
