pub mod ingredients;
pub mod order_tacos;
pub mod orders;
pub mod taco_ingredients;
pub mod tacos;
pub mod users;

pub use ingredients::Entity as Ingredients;
pub use order_tacos::Entity as OrderTacos;
pub use orders::Entity as Orders;
pub use taco_ingredients::Entity as TacoIngredients;
pub use tacos::Entity as Tacos;
pub use users::Entity as Users;
