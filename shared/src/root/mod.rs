pub mod error;
pub mod root_entity;
pub mod root_key;
pub mod root_registry;
