pub mod connection_key;
pub mod context_resolver;
pub mod error;
pub mod net_driver;
pub mod subobject_channel;
