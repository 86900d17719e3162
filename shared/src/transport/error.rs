use thiserror::Error;

use crate::ConnectionKey;

/// Errors a transport boundary can report back to the replication core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The connection is shutting down and can no longer judge or carry calls
    #[error("Connection {connection:?} is closing")]
    ConnectionClosing { connection: ConnectionKey },

    /// The connection isn't known to the driver
    #[error("Connection {connection:?} not found")]
    ConnectionNotFound { connection: ConnectionKey },

    /// No driver is available to service the request
    #[error("Net driver unavailable: {context}")]
    DriverUnavailable { context: &'static str },
}
