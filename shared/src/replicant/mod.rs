pub mod child_replicant;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod replicate;
