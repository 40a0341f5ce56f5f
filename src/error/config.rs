use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("Missing required configuration value: {0}")]
    MissingValue(String),
    #[error("Invalid value for configuration key {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
