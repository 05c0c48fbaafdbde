use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallsError {
    #[error("Cannot draw {count} distinct values from [{lower}, {upper})")]
    InvalidRange {
        count: usize,
        lower: usize,
        upper: usize,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to save {url}: {source}")]
    Save {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Touch log line {line}: {source}")]
    InvalidTouchLog {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("No wallpapers loaded")]
    EmptyGallery,

    #[error("Wallpaper index {index} out of range (gallery holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Fetch,
    Save,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl WallsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRange { .. }
            | Self::InvalidTouchLog { .. }
            | Self::EmptyGallery
            | Self::IndexOutOfRange { .. } => ErrorCategory::Input,
            Self::Http(_) | Self::UnexpectedStatus { .. } | Self::Serialization(_) => {
                ErrorCategory::Fetch
            }
            Self::Save { .. } => ErrorCategory::Save,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Fetch | ErrorCategory::Save => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for the CLI. Every failure is non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Fetch failures are recovered by logging and keeping the previous state.
    pub fn is_fetch_error(&self) -> bool {
        self.category() == ErrorCategory::Fetch
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => {
                "Request fewer wallpapers or use a catalog with more entries"
            }
            Self::Http(_) | Self::UnexpectedStatus { .. } => {
                "Check the network connection and the catalog endpoint, then refresh"
            }
            Self::Serialization(_) => "Make sure the catalog endpoint returns a JSON array",
            Self::Save { .. } => "Check that the image URL is reachable and the library is writable",
            Self::Io(_) => "Check file permissions and available disk space",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration and run again"
            }
            Self::InvalidTouchLog { .. } => {
                "Each touch log line must be a phase or scroll_to JSON object"
            }
            Self::EmptyGallery => "Wait for the catalog to load before saving",
            Self::IndexOutOfRange { .. } => "Pick an index shown in the wallpaper list",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid request: {}", self),
            ErrorCategory::Fetch => format!("Could not load wallpapers: {}", self),
            ErrorCategory::Save => format!("Could not save wallpaper: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("File system error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, WallsError>;
