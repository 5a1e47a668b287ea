/// Broad failure category. Each kind maps to a fixed process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid arguments or configuration.
    Config,
    /// Local filesystem failure (create, open, write, rename).
    Io,
    /// Request could not be completed or returned a non-success status.
    Network,
    /// Malformed CSV content.
    Parse,
    /// Sample index outside `[0, len)`.
    Index,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Config | ErrorKind::Io => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Network => 4,
            ErrorKind::Index => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn index(index: usize, len: usize) -> Self {
        Self::new(
            ErrorKind::Index,
            format!("Sample index {index} out of range for dataset of length {len}."),
        )
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_follows_kind() {
        assert_eq!(AppError::io("x").exit_code(), 2);
        assert_eq!(AppError::parse("x").exit_code(), 3);
        assert_eq!(AppError::network("x").exit_code(), 4);
        assert_eq!(AppError::index(3, 2).exit_code(), 5);
    }

    #[test]
    fn index_error_names_index_and_length() {
        let err = AppError::index(7, 3);
        assert_eq!(err.kind(), ErrorKind::Index);
        assert_eq!(err.to_string(), "Sample index 7 out of range for dataset of length 3.");
    }
}
