// Error types for speed mapping, motor dispatch and kinematics

/// Failure category, independent of the context a failure was reported with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Failure,
    InitFailed,
    InvalidArgument,
    FailedConnection,
    OutOfRange,
    IndexOutOfRange,
    EmptyArray,
    ZeroDivision,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Operation failed: {0}")]
    Failure(String),

    #[error("Initialization failed: {0}")]
    InitFailed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Connection with motor backend failed: {0}")]
    FailedConnection(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot access an element of an empty collection")]
    EmptyArray,

    #[error("Division by zero: {0}")]
    ZeroDivision(String),

    #[error("Could not apply speed {speed} to motor {index}: {source}")]
    SpeedRejected {
        index: usize,
        speed: f64,
        #[source]
        source: Box<Error>,
    },

    #[error("Could not read speed of motor {index}: {source}")]
    SpeedUnavailable {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Could not initialize motor {index} on port {port}: {source}")]
    MotorInit {
        index: usize,
        port: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Category of the error; context wrappers report the kind of what they wrap
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Failure(_) => ErrorKind::Failure,
            Error::InitFailed(_) => ErrorKind::InitFailed,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::FailedConnection(_) => ErrorKind::FailedConnection,
            Error::OutOfRange(_) => ErrorKind::OutOfRange,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::EmptyArray => ErrorKind::EmptyArray,
            Error::ZeroDivision(_) => ErrorKind::ZeroDivision,
            Error::SpeedRejected { source, .. }
            | Error::SpeedUnavailable { source, .. }
            | Error::MotorInit { source, .. } => source.kind(),
        }
    }

    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
