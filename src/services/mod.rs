pub mod auth_service;
pub mod design_service;
pub mod order_service;
pub mod taco_service;
