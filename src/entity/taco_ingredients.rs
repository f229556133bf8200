use sea_orm::entity::prelude::*;

/// Join rows keeping the user's pick order via `position`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "taco_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub taco_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,
    pub ingredient_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tacos::Entity",
        from = "Column::TacoId",
        to = "super::tacos::Column::Id"
    )]
    Tacos,
    #[sea_orm(
        belongs_to = "super::ingredients::Entity",
        from = "Column::IngredientId",
        to = "super::ingredients::Column::Id"
    )]
    Ingredients,
}

impl Related<super::tacos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tacos.def()
    }
}

impl Related<super::ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
