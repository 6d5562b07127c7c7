pub mod common;
pub mod health_profile;
pub mod recipe;
