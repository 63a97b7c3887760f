use std::fmt;

/// Rejected benchmark configuration, raised before any sample is generated
/// or partitioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoSizes,
    ZeroElements,
    TooManyElements { count: usize, max: usize },
    ZeroWorkers,
    TooManyWorkers { count: usize, max: usize },
    Parse { message: String },
}

impl ConfigError {
    /// Configuration field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::NoSizes | ConfigError::ZeroElements | ConfigError::TooManyElements { .. } => "sizes",
            ConfigError::ZeroWorkers | ConfigError::TooManyWorkers { .. } => "workers",
            ConfigError::Parse { .. } => "file",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config Error ({}): ", self.field())?;
        match self {
            ConfigError::NoSizes => write!(f, "at least one element count is required"),
            ConfigError::ZeroElements => write!(f, "element count must be at least 1"),
            ConfigError::TooManyElements { count, max } => {
                write!(f, "element count {} exceeds the maximum of {}", count, max)
            }
            ConfigError::ZeroWorkers => write!(f, "worker count must be at least 1"),
            ConfigError::TooManyWorkers { count, max } => {
                write!(f, "worker count {} exceeds the maximum of {}", count, max)
            }
            ConfigError::Parse { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
