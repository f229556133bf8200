use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::db::OrmConn;
use crate::entity::{
    ingredients::{
        ActiveModel as IngredientActive, Column as IngredientCol, Entity as Ingredients,
        Model as IngredientModel,
    },
    order_tacos::{ActiveModel as OrderTacoActive, Column as OrderTacoCol, Entity as OrderTacos},
    orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
    taco_ingredients::{
        ActiveModel as TacoIngredientActive, Column as TacoIngredientCol, Entity as TacoIngredients,
    },
    tacos::{ActiveModel as TacoActive, Column as TacoCol, Entity as Tacos, Model as TacoModel},
    users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel},
};
use crate::error::AppResult;
use crate::models::{Ingredient, IngredientType, Order, Taco, User};

use super::{IngredientRepository, OrderRepository, TacoRepository, UserRepository};

/// ORM-mapped backend over the `entity` models.
pub struct OrmStore {
    conn: OrmConn,
}

impl OrmStore {
    pub fn new(conn: OrmConn) -> Self {
        Self { conn }
    }
}

fn ingredient_from_entity(model: IngredientModel) -> AppResult<Ingredient> {
    Ok(Ingredient {
        id: model.id,
        name: model.name,
        ingredient_type: IngredientType::parse(&model.ingredient_type)?,
    })
}

fn taco_from_entity(model: TacoModel, ingredients: Vec<String>) -> Taco {
    Taco {
        id: Some(model.id),
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        ingredients,
    }
}

fn order_from_entity(model: OrderModel, tacos: Vec<Uuid>) -> Order {
    Order {
        id: Some(model.id),
        user_id: model.user_id,
        placed_at: model.placed_at.with_timezone(&Utc),
        tacos,
        delivery_name: model.delivery_name,
        delivery_street: model.delivery_street,
        delivery_city: model.delivery_city,
        delivery_state: model.delivery_state,
        delivery_zip: model.delivery_zip,
        cc_number: model.cc_number,
        cc_expiration: model.cc_expiration,
        cc_cvv: model.cc_cvv,
    }
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password_hash,
        fullname: model.fullname,
        street: model.street,
        city: model.city,
        state: model.state,
        zip: model.zip,
        phone_number: model.phone_number,
    }
}

impl OrmStore {
    async fn taco_ingredient_ids(&self, taco_id: Uuid) -> AppResult<Vec<String>> {
        let rows = TacoIngredients::find()
            .filter(TacoIngredientCol::TacoId.eq(taco_id))
            .order_by_asc(TacoIngredientCol::Position)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(|r| r.ingredient_id).collect())
    }

    async fn order_taco_ids(&self, order_id: Uuid) -> AppResult<Vec<Uuid>> {
        let rows = OrderTacos::find()
            .filter(OrderTacoCol::OrderId.eq(order_id))
            .order_by_asc(OrderTacoCol::Position)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(|r| r.taco_id).collect())
    }
}

#[async_trait]
impl IngredientRepository for OrmStore {
    async fn save(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        let existing = Ingredients::find_by_id(ingredient.id.clone())
            .one(&self.conn)
            .await?;
        let active = IngredientActive {
            id: Set(ingredient.id.clone()),
            name: Set(ingredient.name.clone()),
            ingredient_type: Set(ingredient.ingredient_type.as_str().to_string()),
        };
        if existing.is_some() {
            active.update(&self.conn).await?;
        } else {
            active.insert(&self.conn).await?;
        }
        Ok(ingredient)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Ingredient>> {
        let model = Ingredients::find_by_id(id.to_string()).one(&self.conn).await?;
        model.map(ingredient_from_entity).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Ingredient>> {
        let models = Ingredients::find()
            .order_by_asc(IngredientCol::Id)
            .all(&self.conn)
            .await?;
        models.into_iter().map(ingredient_from_entity).collect()
    }
}

#[async_trait]
impl TacoRepository for OrmStore {
    async fn save(&self, taco: Taco) -> AppResult<Taco> {
        let id = taco.id.unwrap_or_else(Uuid::new_v4);
        let txn = self.conn.begin().await?;

        if Tacos::find_by_id(id).one(&txn).await?.is_none() {
            TacoActive {
                id: Set(id),
                name: Set(taco.name.clone()),
                created_at: Set(taco.created_at.into()),
            }
            .insert(&txn)
            .await?;
        }

        TacoIngredients::delete_many()
            .filter(TacoIngredientCol::TacoId.eq(id))
            .exec(&txn)
            .await?;
        for (position, ingredient_id) in taco.ingredients.iter().enumerate() {
            TacoIngredientActive {
                taco_id: Set(id),
                position: Set(position as i32),
                ingredient_id: Set(ingredient_id.clone()),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(Taco {
            id: Some(id),
            ..taco
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Taco>> {
        let model = match Tacos::find_by_id(id).one(&self.conn).await? {
            Some(m) => m,
            None => return Ok(None),
        };
        let ingredients = self.taco_ingredient_ids(id).await?;
        Ok(Some(taco_from_entity(model, ingredients)))
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Taco>> {
        let models = Tacos::find()
            .order_by_desc(TacoCol::CreatedAt)
            .limit(limit.max(0) as u64)
            .all(&self.conn)
            .await?;

        let mut tacos = Vec::with_capacity(models.len());
        for model in models {
            let ingredients = self.taco_ingredient_ids(model.id).await?;
            tacos.push(taco_from_entity(model, ingredients));
        }
        Ok(tacos)
    }
}

#[async_trait]
impl OrderRepository for OrmStore {
    async fn save(&self, order: Order) -> AppResult<Order> {
        let id = order.id.unwrap_or_else(Uuid::new_v4);
        let txn = self.conn.begin().await?;

        if Orders::find_by_id(id).one(&txn).await?.is_none() {
            OrderActive {
                id: Set(id),
                user_id: Set(order.user_id),
                placed_at: Set(order.placed_at.into()),
                delivery_name: Set(order.delivery_name.clone()),
                delivery_street: Set(order.delivery_street.clone()),
                delivery_city: Set(order.delivery_city.clone()),
                delivery_state: Set(order.delivery_state.clone()),
                delivery_zip: Set(order.delivery_zip.clone()),
                cc_number: Set(order.cc_number.clone()),
                cc_expiration: Set(order.cc_expiration.clone()),
                cc_cvv: Set(order.cc_cvv.clone()),
            }
            .insert(&txn)
            .await?;

            for (position, taco_id) in order.tacos.iter().enumerate() {
                OrderTacoActive {
                    order_id: Set(id),
                    position: Set(position as i32),
                    taco_id: Set(*taco_id),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;
        Ok(Order {
            id: Some(id),
            ..order
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let model = match Orders::find_by_id(id).one(&self.conn).await? {
            Some(m) => m,
            None => return Ok(None),
        };
        let tacos = self.order_taco_ids(id).await?;
        Ok(Some(order_from_entity(model, tacos)))
    }

    async fn find_recent_by_user(&self, user_id: Uuid, page_size: i64) -> AppResult<Vec<Order>> {
        let models = Orders::find()
            .filter(OrderCol::UserId.eq(user_id))
            .order_by_desc(OrderCol::PlacedAt)
            .limit(page_size.max(0) as u64)
            .all(&self.conn)
            .await?;

        let mut orders = Vec::with_capacity(models.len());
        for model in models {
            let tacos = self.order_taco_ids(model.id).await?;
            orders.push(order_from_entity(model, tacos));
        }
        Ok(orders)
    }
}

#[async_trait]
impl UserRepository for OrmStore {
    async fn save(&self, user: User) -> AppResult<User> {
        let active = UserActive {
            id: Set(user.id),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            fullname: Set(user.fullname.clone()),
            street: Set(user.street.clone()),
            city: Set(user.city.clone()),
            state: Set(user.state.clone()),
            zip: Set(user.zip.clone()),
            phone_number: Set(user.phone_number.clone()),
        };
        if Users::find_by_id(user.id).one(&self.conn).await?.is_some() {
            active.update(&self.conn).await?;
        } else {
            active.insert(&self.conn).await?;
        }
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let model = Users::find_by_id(id).one(&self.conn).await?;
        Ok(model.map(user_from_entity))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let model = Users::find()
            .filter(UserCol::Username.eq(username))
            .one(&self.conn)
            .await?;
        Ok(model.map(user_from_entity))
    }
}
