use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub placed_at: DateTimeWithTimeZone,
    pub delivery_name: String,
    pub delivery_street: String,
    pub delivery_city: String,
    pub delivery_state: String,
    pub delivery_zip: String,
    pub cc_number: String,
    pub cc_expiration: String,
    pub cc_cvv: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::order_tacos::Entity")]
    OrderTacos,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::order_tacos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTacos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
