use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Ingredient, Order, Taco, User};

use super::{IngredientRepository, OrderRepository, TacoRepository, UserRepository};

#[derive(Default)]
struct Tables {
    ingredients: BTreeMap<String, Ingredient>,
    tacos: HashMap<Uuid, Taco>,
    orders: HashMap<Uuid, Order>,
    users: HashMap<Uuid, User>,
}

/// Backend kept entirely in process memory. Used as the test profile and for
/// demo runs without a database; it honors the same contracts as the SQL
/// backends.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IngredientRepository for InMemoryStore {
    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        self.tables
            .write()
            .await
            .ingredients
            .insert(ingredient.id.clone(), ingredient.clone());
        Ok(ingredient)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Ingredient>> {
        Ok(self.tables.read().await.ingredients.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        Ok(self.tables.read().await.ingredients.values().cloned().collect())
    }
}

#[async_trait]
impl TacoRepository for InMemoryStore {
    async fn save(&self, taco: Taco) -> AppResult<Taco> {
        let id = taco.id.unwrap_or_else(Uuid::new_v4);
        let stored = Taco {
            id: Some(id),
            ..taco
        };
        self.tables.write().await.tacos.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Taco>> {
        Ok(self.tables.read().await.tacos.get(&id).cloned())
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Taco>> {
        let mut tacos: Vec<Taco> = self.tables.read().await.tacos.values().cloned().collect();
        tacos.sort_by_key(|t| t.created_at);
        let mut recent: Vec<Taco> = tacos.into_iter().rev().collect();
        recent.truncate(limit.max(0) as usize);
        Ok(recent)
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn save(&self, order: Order) -> AppResult<Order> {
        let id = order.id.unwrap_or_else(Uuid::new_v4);
        let stored = Order {
            id: Some(id),
            ..order
        };
        self.tables.write().await.orders.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        Ok(self.tables.read().await.orders.get(&id).cloned())
    }

    async fn find_recent_by_user(&self, user_id: Uuid, page_size: i64) -> AppResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .tables
            .read()
            .await
            .orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.placed_at);
        let mut recent: Vec<Order> = orders.into_iter().rev().collect();
        recent.truncate(page_size.max(0) as usize);
        Ok(recent)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn save(&self, user: User) -> AppResult<User> {
        self.tables.write().await.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}
