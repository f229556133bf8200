use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub ingredient_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::taco_ingredients::Entity")]
    TacoIngredients,
}

impl Related<super::taco_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TacoIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
