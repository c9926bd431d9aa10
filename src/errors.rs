use std::fmt;

#[derive(Debug, Clone)]
pub enum EncurtadorError {
    StoreOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    Archive(String),
    Config(String),
}

impl EncurtadorError {
    /// Stable error code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            EncurtadorError::StoreOperation(_) => "E001",
            EncurtadorError::FileOperation(_) => "E002",
            EncurtadorError::Validation(_) => "E003",
            EncurtadorError::NotFound(_) => "E004",
            EncurtadorError::Serialization(_) => "E005",
            EncurtadorError::Archive(_) => "E006",
            EncurtadorError::Config(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            EncurtadorError::StoreOperation(_) => "Store Operation Error",
            EncurtadorError::FileOperation(_) => "File Operation Error",
            EncurtadorError::Validation(_) => "Validation Error",
            EncurtadorError::NotFound(_) => "Resource Not Found",
            EncurtadorError::Serialization(_) => "Serialization Error",
            EncurtadorError::Archive(_) => "Archive Error",
            EncurtadorError::Config(_) => "Configuration Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            EncurtadorError::StoreOperation(msg) => msg,
            EncurtadorError::FileOperation(msg) => msg,
            EncurtadorError::Validation(msg) => msg,
            EncurtadorError::NotFound(msg) => msg,
            EncurtadorError::Serialization(msg) => msg,
            EncurtadorError::Archive(msg) => msg,
            EncurtadorError::Config(msg) => msg,
        }
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EncurtadorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EncurtadorError {}

// Convenience constructors
impl EncurtadorError {
    pub fn store_operation<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::StoreOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::Serialization(msg.into())
    }

    pub fn archive<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::Archive(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        EncurtadorError::Config(msg.into())
    }
}

impl From<std::io::Error> for EncurtadorError {
    fn from(err: std::io::Error) -> Self {
        EncurtadorError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EncurtadorError {
    fn from(err: serde_json::Error) -> Self {
        EncurtadorError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EncurtadorError>;
