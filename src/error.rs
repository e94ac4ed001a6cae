use thiserror::Error;

/// Fatal errors while bringing up the window.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to set up the frame buffer: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("failed to start the redraw thread: {0}")]
    Thread(#[from] std::io::Error),

    #[error("window has a zero-sized dimension ({0}x{1})")]
    ZeroSize(u32, u32),
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgError {
    #[error("expected a value for {0}")]
    MissingValue(&'static str),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },

    #[error("{flag} must be between {min} and {max}")]
    OutOfRange {
        flag: &'static str,
        min: u64,
        max: u64,
    },
}
