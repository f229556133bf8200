use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use uuid::Uuid;

use taco_cloud_api::{
    config::AppConfig,
    models::{User, builtin_catalog},
    repository::Repositories,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let repos = Repositories::connect(&config).await?;

    for ingredient in builtin_catalog() {
        repos.ingredients.save(ingredient).await?;
    }
    println!("Seeded ingredient catalog");

    let user_id = ensure_user(&repos, "habanero", "tacocloud").await?;
    println!("Seed completed. Demo user ID: {user_id}");
    Ok(())
}

async fn ensure_user(repos: &Repositories, username: &str, password: &str) -> anyhow::Result<Uuid> {
    if let Some(existing) = repos.users.find_by_username(username).await? {
        println!("User {username} already exists");
        return Ok(existing.id);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = repos
        .users
        .save(User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            fullname: "Demo User".to_string(),
            street: "1234 Culinary Blvd".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip: "78701".to_string(),
            phone_number: "512-555-1234".to_string(),
        })
        .await?;

    println!("Ensured user {username}");
    Ok(user.id)
}
