use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Failed to read catalog from {location}: {reason}")]
    CatalogReadError { location: String, reason: String },

    #[error("Malformed catalog record on line {line}: expected 3 fields, found {fields}")]
    MalformedRecordError { line: usize, fields: usize },

    #[error("No business models available for matching")]
    EmptyCatalogError,

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Input,
    Configuration,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlannerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlannerError::CatalogReadError { .. }
            | PlannerError::MalformedRecordError { .. }
            | PlannerError::EmptyCatalogError => ErrorCategory::Catalog,
            PlannerError::ValidationError { .. } => ErrorCategory::Input,
            PlannerError::ConfigError { .. } | PlannerError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            PlannerError::ApiError(_) => ErrorCategory::Network,
            PlannerError::CsvError(_)
            | PlannerError::IoError(_)
            | PlannerError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlannerError::ValidationError { .. } => ErrorSeverity::Medium,
            PlannerError::ApiError(_) => ErrorSeverity::Medium,
            PlannerError::MalformedRecordError { .. }
            | PlannerError::EmptyCatalogError
            | PlannerError::ConfigError { .. }
            | PlannerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PlannerError::CatalogReadError { .. }
            | PlannerError::CsvError(_)
            | PlannerError::IoError(_)
            | PlannerError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlannerError::CatalogReadError { location, .. } => {
                format!("Could not read the business model catalog at {}", location)
            }
            PlannerError::MalformedRecordError { line, .. } => {
                format!("The catalog file has a broken record on line {}", line)
            }
            PlannerError::EmptyCatalogError => {
                "The catalog does not contain any business models".to_string()
            }
            PlannerError::ValidationError { message, .. } => message.clone(),
            PlannerError::ApiError(_) => "Could not reach the catalog service".to_string(),
            PlannerError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlannerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            PlannerError::CsvError(_) | PlannerError::IoError(_) => {
                "A file operation failed".to_string()
            }
            PlannerError::SerializationError(_) => "Could not encode the result".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlannerError::CatalogReadError { .. } => {
                "Check that the catalog path exists and is readable"
            }
            PlannerError::MalformedRecordError { .. } => {
                "Each line must look like name|description|skill1, skill2"
            }
            PlannerError::EmptyCatalogError => "Add at least one business model to the catalog",
            PlannerError::ValidationError { .. } => "Correct the input and submit again",
            PlannerError::ApiError(_) => "Make sure the catalog server is running",
            PlannerError::ConfigError { .. } | PlannerError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            PlannerError::CsvError(_) | PlannerError::IoError(_) => {
                "Check file permissions and available disk space"
            }
            PlannerError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        PlannerError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
