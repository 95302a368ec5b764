use std::error;
use std::fmt;
use std::io;

// We derive `Debug` because all types should probably derive `Debug`.
#[derive(Debug)]
pub enum WindowError {
    Io(io::Error),
    Csv(csv::Error),

    // Our own errors
    /// A length or window parameter is outside of its domain.
    InvalidArgument(&'static str),
    /// The registry has no window with this name.
    UnknownWindow(String),
    /// A window was applied to a frame of a different length.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::Io(err) => err.fmt(f),
            WindowError::Csv(err) => err.fmt(f),
            WindowError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            WindowError::UnknownWindow(name) => write!(f, "unknown window: {}", name),
            WindowError::LengthMismatch { expected, actual } => write!(
                f,
                "window has {} points but the frame has {} samples",
                expected, actual
            ),
        }
    }
}

impl error::Error for WindowError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            WindowError::Io(err) => Some(err),
            WindowError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for WindowError {
    fn from(err: io::Error) -> WindowError {
        WindowError::Io(err)
    }
}

impl From<csv::Error> for WindowError {
    fn from(err: csv::Error) -> WindowError {
        WindowError::Csv(err)
    }
}
