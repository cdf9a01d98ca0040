use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invariant_violation(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvariantViolation {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn unsupported_input(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::UnsupportedInput {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_range(index: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index }.into())
    }

    /// Returns `true` when the error was raised by an argument precondition check.
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invariant violation: {message}")]
    InvariantViolation { message: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("unsupported input: {message}")]
    UnsupportedInput { message: String },

    #[error("index out of range (requested: {index})")]
    IndexOutOfRange { index: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
