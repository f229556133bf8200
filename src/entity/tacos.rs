use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tacos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::taco_ingredients::Entity")]
    TacoIngredients,
    #[sea_orm(has_many = "super::order_tacos::Entity")]
    OrderTacos,
}

impl Related<super::taco_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TacoIngredients.def()
    }
}

impl Related<super::order_tacos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderTacos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
