use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config file: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("POST {url} failed: {status} {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to build HTTP client: {message}")]
    ClientBuildError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SeedError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SeedError::IoError { .. }
            | SeedError::ParseError { .. }
            | SeedError::TomlError(_)
            | SeedError::InvalidConfigValueError { .. }
            | SeedError::MissingConfigError { .. } => ErrorCategory::Input,
            SeedError::UnexpectedStatus { .. } | SeedError::TransportError(_) => {
                ErrorCategory::Network
            }
            SeedError::ClientBuildError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Success is always 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SeedError::IoError { .. } => "Check that the seed file exists, or pass its location with --file",
            SeedError::ParseError { .. } => {
                "The seed file must be a JSON object whose countries/states/cities keys hold arrays"
            }
            SeedError::TomlError(_) => "Fix the syntax of the file passed with --config",
            SeedError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and config file values"
            }
            SeedError::MissingConfigError { .. } => {
                "Pass --base-url or set base_url in the file given to --config"
            }
            SeedError::UnexpectedStatus { status, .. } if *status == 401 || *status == 403 => {
                "The backend rejected the request; check --api-key or the API_KEY variable"
            }
            SeedError::UnexpectedStatus { .. } => {
                "Inspect the backend response above; categories after the failing one were not sent"
            }
            SeedError::TransportError(_) => "Check that the backend is reachable at --base-url",
            SeedError::ClientBuildError { .. } => {
                "Make sure the API key only contains visible ASCII characters"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not start seeding: {}", self),
            ErrorCategory::Network => format!("Seeding aborted: {}", self),
            ErrorCategory::System => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
