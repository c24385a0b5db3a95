//! Persisted tool configuration

pub mod store;

pub use store::ConfigStore;

pub const KEY_LANGUAGE: &str = "language";
pub const KEY_DEFAULT_COMPONENTS: &str = "default_components";
pub const KEY_DEFAULT_RECIPE: &str = "default_recipe";
