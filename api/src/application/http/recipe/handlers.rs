pub mod create_health_profile;
pub mod enrich_recipe;
