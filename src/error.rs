use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to create window: {0}")]
    Creation(#[from] glutin::CreationError),
    #[error("OpenGL context error: {0}")]
    Context(#[from] glutin::ContextError),
    #[error("Error initializing tracing: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),
}
