use thiserror::Error;

use crate::host::HostError;
use crate::interop::channel::ChannelError;
use crate::interop::gateway::InteropError;
use crate::registry::RegistryError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Interop error: {0}")]
    Interop(#[from] InteropError),
    #[error("Host error: {0}")]
    Host(#[from] HostError),
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
