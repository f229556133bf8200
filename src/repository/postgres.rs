use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{Ingredient, IngredientType, Order, Taco, User};

use super::{IngredientRepository, OrderRepository, TacoRepository, UserRepository};

/// Relational backend over hand-written SQL.
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct IngredientRow {
    id: String,
    name: String,
    ingredient_type: String,
}

impl IngredientRow {
    fn into_model(self) -> AppResult<Ingredient> {
        Ok(Ingredient {
            id: self.id,
            name: self.name,
            ingredient_type: IngredientType::parse(&self.ingredient_type)?,
        })
    }
}

#[derive(FromRow)]
struct TacoRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct TacoIngredientRow {
    taco_id: Uuid,
    ingredient_id: String,
}

#[derive(FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: Uuid,
    placed_at: DateTime<Utc>,
    delivery_name: String,
    delivery_street: String,
    delivery_city: String,
    delivery_state: String,
    delivery_zip: String,
    cc_number: String,
    cc_expiration: String,
    cc_cvv: String,
}

#[derive(FromRow)]
struct OrderTacoRow {
    order_id: Uuid,
    taco_id: Uuid,
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    fullname: String,
    street: String,
    city: String,
    state: String,
    zip: String,
    phone_number: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            fullname: row.fullname,
            street: row.street,
            city: row.city,
            state: row.state,
            zip: row.zip,
            phone_number: row.phone_number,
        }
    }
}

#[async_trait]
impl IngredientRepository for PgStore {
    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        sqlx::query(
            r#"
            INSERT INTO ingredients (id, name, ingredient_type)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name,
                ingredient_type = EXCLUDED.ingredient_type
            "#,
        )
        .bind(&ingredient.id)
        .bind(&ingredient.name)
        .bind(ingredient.ingredient_type.as_str())
        .execute(&self.pool)
        .await?;
        Ok(ingredient)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Ingredient>> {
        let row = sqlx::query_as::<_, IngredientRow>(
            "SELECT id, name, ingredient_type FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(IngredientRow::into_model).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query_as::<_, IngredientRow>(
            "SELECT id, name, ingredient_type FROM ingredients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(IngredientRow::into_model).collect()
    }
}

#[async_trait]
impl TacoRepository for PgStore {
    async fn save(&self, taco: Taco) -> AppResult<Taco> {
        let id = taco.id.unwrap_or_else(Uuid::new_v4);
        let mut txn = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO tacos (id, name, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(id)
        .bind(&taco.name)
        .bind(taco.created_at)
        .execute(&mut *txn)
        .await?;

        sqlx::query("DELETE FROM taco_ingredients WHERE taco_id = $1")
            .bind(id)
            .execute(&mut *txn)
            .await?;

        for (position, ingredient_id) in taco.ingredients.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO taco_ingredients (taco_id, position, ingredient_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(id)
            .bind(position as i32)
            .bind(ingredient_id)
            .execute(&mut *txn)
            .await?;
        }

        txn.commit().await?;
        Ok(Taco {
            id: Some(id),
            ..taco
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Taco>> {
        let row = sqlx::query_as::<_, TacoRow>(
            "SELECT id, name, created_at FROM tacos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        let ingredients: Vec<(String,)> = sqlx::query_as(
            "SELECT ingredient_id FROM taco_ingredients WHERE taco_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Taco {
            id: Some(row.id),
            name: row.name,
            created_at: row.created_at,
            ingredients: ingredients.into_iter().map(|(i,)| i).collect(),
        }))
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Taco>> {
        let rows = sqlx::query_as::<_, TacoRow>(
            "SELECT id, name, created_at FROM tacos ORDER BY created_at DESC, id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let links = sqlx::query_as::<_, TacoIngredientRow>(
            r#"
            SELECT taco_id, ingredient_id FROM taco_ingredients
            WHERE taco_id = ANY($1)
            ORDER BY taco_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let ingredients = links
                    .iter()
                    .filter(|l| l.taco_id == row.id)
                    .map(|l| l.ingredient_id.clone())
                    .collect();
                Taco {
                    id: Some(row.id),
                    name: row.name,
                    created_at: row.created_at,
                    ingredients,
                }
            })
            .collect())
    }
}

#[async_trait]
impl OrderRepository for PgStore {
    async fn save(&self, order: Order) -> AppResult<Order> {
        let id = order.id.unwrap_or_else(Uuid::new_v4);
        let mut txn = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, user_id, placed_at,
                delivery_name, delivery_street, delivery_city, delivery_state, delivery_zip,
                cc_number, cc_expiration, cc_cvv)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(order.user_id)
        .bind(order.placed_at)
        .bind(&order.delivery_name)
        .bind(&order.delivery_street)
        .bind(&order.delivery_city)
        .bind(&order.delivery_state)
        .bind(&order.delivery_zip)
        .bind(&order.cc_number)
        .bind(&order.cc_expiration)
        .bind(&order.cc_cvv)
        .execute(&mut *txn)
        .await?;

        for (position, taco_id) in order.tacos.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_tacos (order_id, position, taco_id)
                VALUES ($1, $2, $3)
                ON CONFLICT (order_id, position) DO NOTHING
                "#,
            )
            .bind(id)
            .bind(position as i32)
            .bind(taco_id)
            .execute(&mut *txn)
            .await?;
        }

        txn.commit().await?;
        Ok(Order {
            id: Some(id),
            ..order
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        let tacos: Vec<(Uuid,)> = sqlx::query_as(
            "SELECT taco_id FROM order_tacos WHERE order_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(order_from_row(
            row,
            tacos.into_iter().map(|(t,)| t).collect(),
        )))
    }

    async fn find_recent_by_user(&self, user_id: Uuid, page_size: i64) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            "SELECT * FROM orders WHERE user_id = $1 ORDER BY placed_at DESC, id LIMIT $2",
        )
        .bind(user_id)
        .bind(page_size)
        .fetch_all(&self.pool)
        .await?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let links = sqlx::query_as::<_, OrderTacoRow>(
            r#"
            SELECT order_id, taco_id FROM order_tacos
            WHERE order_id = ANY($1)
            ORDER BY order_id, position
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let tacos = links
                    .iter()
                    .filter(|l| l.order_id == row.id)
                    .map(|l| l.taco_id)
                    .collect();
                order_from_row(row, tacos)
            })
            .collect())
    }
}

fn order_from_row(row: OrderRow, tacos: Vec<Uuid>) -> Order {
    Order {
        id: Some(row.id),
        user_id: row.user_id,
        placed_at: row.placed_at,
        tacos,
        delivery_name: row.delivery_name,
        delivery_street: row.delivery_street,
        delivery_city: row.delivery_city,
        delivery_state: row.delivery_state,
        delivery_zip: row.delivery_zip,
        cc_number: row.cc_number,
        cc_expiration: row.cc_expiration,
        cc_cvv: row.cc_cvv,
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn save(&self, user: User) -> AppResult<User> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, fullname,
                street, city, state, zip, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                password_hash = EXCLUDED.password_hash,
                fullname = EXCLUDED.fullname,
                street = EXCLUDED.street,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                zip = EXCLUDED.zip,
                phone_number = EXCLUDED.phone_number
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.fullname)
        .bind(&user.street)
        .bind(&user.city)
        .bind(&user.state)
        .bind(&user.zip)
        .bind(&user.phone_number)
        .execute(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(User::from))
    }
}
