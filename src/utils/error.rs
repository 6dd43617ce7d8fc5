use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Student with ID {0} already exists")]
    DuplicateId(String),

    #[error("Student with ID {0} not found")]
    NotFound(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("System error: {0}")]
    System(String),
}

impl AppError {
    /// Whether a prompt should ask again instead of giving up
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::DuplicateId(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    NotFound {
        item_type: String,
        search_term: String,
    },
    EmptyList {
        item_type: String,
    },
    Cancelled(String),
    Success(String),
}

impl FlowResult {
    pub fn render(&self) -> String {
        match self {
            FlowResult::NotFound {
                item_type,
                search_term,
            } => {
                let msg = format!("{} {} not found!", item_type, search_term);
                format!("⚠️  {}", OutputStyle::warning(&msg))
            }
            FlowResult::EmptyList { item_type } => {
                let msg = format!("No {} found", item_type);
                format!("{}", OutputStyle::muted(&msg))
            }
            FlowResult::Cancelled(msg) => format!(">> {}", OutputStyle::muted(msg)),
            FlowResult::Success(msg) => format!(">> {}", OutputStyle::success(msg)),
        }
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::InputClosed => {
            eprintln!("{}", OutputStyle::muted("Input closed, exiting."));
        }
        AppError::InvalidInput(msg) | AppError::Config(msg) => {
            eprintln!("⚠️  {}", OutputStyle::warning(msg));
        }
        other => {
            eprintln!("❌ {}", OutputStyle::error(&other.to_string()));
        }
    }
}
