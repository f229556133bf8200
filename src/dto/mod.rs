pub mod auth;
pub mod design;
pub mod orders;
pub mod tacos;
