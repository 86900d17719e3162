pub mod replication_flags;
pub mod subobject_slot;
pub mod walk;
