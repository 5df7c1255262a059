//! You can find the errors that can occur during server startup here

use std::fmt::{Display, Formatter};
use std::io;
use std::net::SocketAddr;

/// The errors that can occur during server startup
#[derive(Debug)]
pub enum StartServerError {
    /// The listen address could not be bound
    Bind {
        /// The configured address
        address: SocketAddr,
        /// The underlying error
        source: io::Error,
    },
    /// The server stopped with an error
    Run(io::Error),
}

impl Display for StartServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StartServerError::Bind { address, source } => {
                write!(f, "Could not bind to {address}: {source}")
            }
            StartServerError::Run(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StartServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartServerError::Bind { source, .. } => Some(source),
            StartServerError::Run(err) => Some(err),
        }
    }
}

impl From<io::Error> for StartServerError {
    fn from(value: io::Error) -> Self {
        Self::Run(value)
    }
}
