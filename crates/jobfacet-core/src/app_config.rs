use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Default character budget for card-view previews.
    pub preview_max_len: usize,
    /// Label shown when a job's location is missing or not a place name.
    pub location_fallback: String,
    /// Optional YAML file layering extra raw -> label entries over the
    /// built-in vocabulary.
    pub vocab_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            preview_max_len: 200,
            location_fallback: "Location TBD".to_string(),
            vocab_path: None,
        }
    }
}
