use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::{AppConfig, StorageBackend};
use crate::db;
use crate::error::AppResult;
use crate::models::{Ingredient, Order, Taco, User};

pub mod memory;
pub mod orm;
pub mod postgres;

/// Catalog reference data: read-heavy, `save` exists for seeding only.
#[async_trait]
pub trait IngredientRepository: Send + Sync {
    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Ingredient>>;
    async fn find_all(&self) -> AppResult<Vec<Ingredient>>;
}

#[async_trait]
pub trait TacoRepository: Send + Sync {
    /// Persists the taco, assigning an id when none is set yet.
    async fn save(&self, taco: Taco) -> AppResult<Taco>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Taco>>;
    /// Newest first by `created_at`, at most `limit` rows.
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Taco>>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save(&self, order: Order) -> AppResult<Order>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>>;
    /// The user's most recently placed orders, newest first, at most
    /// `page_size` rows.
    async fn find_recent_by_user(&self, user_id: Uuid, page_size: i64) -> AppResult<Vec<Order>>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn save(&self, user: User) -> AppResult<User>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// One handle per entity contract. Backends are interchangeable: same
/// ordering, same `Option`-as-absence signaling, same page-size truncation.
#[derive(Clone)]
pub struct Repositories {
    pub ingredients: Arc<dyn IngredientRepository>,
    pub tacos: Arc<dyn TacoRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    pub fn postgres(pool: db::DbPool) -> Self {
        let store = Arc::new(postgres::PgStore::new(pool));
        Self {
            ingredients: store.clone(),
            tacos: store.clone(),
            orders: store.clone(),
            users: store,
        }
    }

    pub fn sea_orm(conn: db::OrmConn) -> Self {
        let store = Arc::new(orm::OrmStore::new(conn));
        Self {
            ingredients: store.clone(),
            tacos: store.clone(),
            orders: store.clone(),
            users: store,
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(memory::InMemoryStore::new());
        Self {
            ingredients: store.clone(),
            tacos: store.clone(),
            orders: store.clone(),
            users: store,
        }
    }

    /// Builds the configured backend, running migrations where the backend
    /// has a database behind it.
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        match config.storage_backend {
            StorageBackend::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;
                let pool = db::create_pool(url).await?;
                sqlx::migrate!("./migrations").run(&pool).await?;
                Ok(Self::postgres(pool))
            }
            StorageBackend::SeaOrm => {
                let url = config
                    .database_url
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;
                let conn = db::create_orm_conn(url).await?;
                db::run_migrations(&conn).await?;
                Ok(Self::sea_orm(conn))
            }
            StorageBackend::Memory => {
                let repos = Self::in_memory();
                for ingredient in crate::models::builtin_catalog() {
                    repos.ingredients.save(ingredient).await?;
                }
                Ok(repos)
            }
        }
    }
}
