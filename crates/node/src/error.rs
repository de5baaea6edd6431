use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Already started
    #[error("already started")]
    AlreadyStarted,

    /// Could not bind the listen address.
    #[error("failed to bind listen address: {0}")]
    Bind(std::io::Error),

    /// Engine could not be built from the configuration.
    #[error(transparent)]
    Engine(#[from] sdx_version_control::EngineError),

    /// Could not set global default subscriber.
    #[error("could not set global default subscriber: {0}")]
    SetTracing(#[from] tracing::dispatcher::SetGlobalDefaultError),
}
