pub mod callspace;
pub mod dispatch;
pub mod remote_function;
pub mod rpc_args;
