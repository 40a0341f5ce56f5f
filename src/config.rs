//! Configuration consumed by the token issuer and the database seeder.
//!
//! The backend under test keeps its settings in a feathers-style JSON document with an
//! `authentication` section and a database connection string. [`TestConfig`] carries the
//! subset the helpers need and is passed explicitly to whatever consumes it, loaded either
//! from environment variables or from one of those JSON documents.

use std::{env::VarError, path::Path};

use chrono::Duration;
use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::{
    constant::{
        TEST_AUTHENTICATION_SECRET, TEST_DATABASE_URL, TEST_JWT_ALGORITHM, TEST_JWT_AUDIENCE,
        TEST_JWT_EXPIRES_IN, TEST_JWT_HEADER_TYP, TEST_JWT_ISSUER, TEST_JWT_SUBJECT,
    },
    error::{config::ConfigError, TestError},
};

const MILLIS_PER_SECOND: f64 = 1_000.0;
const MILLIS_PER_MINUTE: f64 = MILLIS_PER_SECOND * 60.0;
const MILLIS_PER_HOUR: f64 = MILLIS_PER_MINUTE * 60.0;
const MILLIS_PER_DAY: f64 = MILLIS_PER_HOUR * 24.0;
const MILLIS_PER_WEEK: f64 = MILLIS_PER_DAY * 7.0;
const MILLIS_PER_YEAR: f64 = MILLIS_PER_DAY * 365.25;

static EXPIRES_IN_KEY: &str = "authentication.jwt.expiresIn";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    pub authentication: AuthConfig,
    pub database_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub secret: String,
    pub jwt: JwtConfig,
}

/// Signing options applied to every issued token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtConfig {
    pub audience: String,
    pub issuer: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: ExpiresIn,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_header")]
    pub header: JwtHeaderOptions,
}

/// Extra token header fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtHeaderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

/// Token lifetime as written in the backend configuration.
///
/// A number counts seconds and may be fractional. A string is an `ms` style span such as
/// `"1d"`, `"10h"` or `"2 days"`; a string without a unit counts milliseconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiresIn {
    Seconds(f64),
    Span(String),
}

#[derive(Deserialize)]
struct ConfigFile {
    authentication: AuthConfig,
    #[serde(alias = "mongodb")]
    database: Option<String>,
}

fn default_algorithm() -> String {
    TEST_JWT_ALGORITHM.to_string()
}

fn default_expires_in() -> ExpiresIn {
    ExpiresIn::Span(TEST_JWT_EXPIRES_IN.to_string())
}

fn default_subject() -> String {
    TEST_JWT_SUBJECT.to_string()
}

fn default_header() -> JwtHeaderOptions {
    JwtHeaderOptions {
        typ: Some(TEST_JWT_HEADER_TYP.to_string()),
        kid: None,
    }
}

impl TestConfig {
    /// Configuration for self-contained tests: in-memory SQLite and the placeholder secret.
    pub fn local() -> Self {
        Self {
            authentication: AuthConfig {
                secret: TEST_AUTHENTICATION_SECRET.to_string(),
                jwt: JwtConfig {
                    audience: TEST_JWT_AUDIENCE.to_string(),
                    issuer: TEST_JWT_ISSUER.to_string(),
                    algorithm: default_algorithm(),
                    expires_in: default_expires_in(),
                    subject: default_subject(),
                    header: default_header(),
                },
            },
            database_url: TEST_DATABASE_URL.to_string(),
        }
    }

    /// Read configuration from environment variables.
    ///
    /// Required: `AUTHENTICATION_SECRET`, `JWT_AUDIENCE`, `JWT_ISSUER`, `DATABASE_URL`.
    /// Optional: `JWT_ALGORITHM`, `JWT_EXPIRES_IN`, `JWT_SUBJECT`, `JWT_HEADER_TYP`,
    /// `JWT_HEADER_KID`. An all-digit `JWT_EXPIRES_IN` counts seconds.
    ///
    /// # Returns
    /// - `Ok(TestConfig)` - All required variables were present
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is not valid unicode
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut header = default_header();
        if let Some(typ) = optional_var("JWT_HEADER_TYP")? {
            header.typ = Some(typ);
        }
        header.kid = optional_var("JWT_HEADER_KID")?;

        Ok(Self {
            authentication: AuthConfig {
                secret: required_var("AUTHENTICATION_SECRET")?,
                jwt: JwtConfig {
                    audience: required_var("JWT_AUDIENCE")?,
                    issuer: required_var("JWT_ISSUER")?,
                    algorithm: optional_var("JWT_ALGORITHM")?.unwrap_or_else(default_algorithm),
                    expires_in: optional_var("JWT_EXPIRES_IN")?
                        .map(|value| ExpiresIn::from_env_value(&value))
                        .unwrap_or_else(default_expires_in),
                    subject: optional_var("JWT_SUBJECT")?.unwrap_or_else(default_subject),
                    header,
                },
            },
            database_url: required_var("DATABASE_URL")?,
        })
    }

    /// Load a `.env` file if one exists, then read the environment.
    ///
    /// The file is searched for in the working directory and its parents. Variables already
    /// set in the process are not overridden.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }

        Self::from_env()
    }

    /// Load the env file at `path`, then read the environment.
    ///
    /// # Returns
    /// - `Ok(TestConfig)` - All required variables were present after loading
    /// - `Err(ConfigError::InvalidEnvValue)` - The file could not be read or parsed
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is still not set
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| ConfigError::InvalidEnvValue {
            var: path.display().to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!("Loaded environment from {}", path.display());

        Self::from_env()
    }

    /// Read a feathers-style JSON configuration document.
    ///
    /// The connection string is taken from `database`, or from `mongodb` as the backend's own
    /// configuration names it. Unknown keys are ignored.
    ///
    /// # Arguments
    /// - `path` - Path to the JSON document
    ///
    /// # Returns
    /// - `Ok(TestConfig)` - Parsed configuration
    /// - `Err(TestError::IoError)` - File could not be read
    /// - `Err(TestError::JsonError)` - File is not a valid configuration document
    /// - `Err(TestError::ConfigError)` - No connection string present
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TestError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents)?;

        let database_url = file
            .database
            .ok_or_else(|| ConfigError::MissingValue("database".to_string()))?;

        tracing::debug!("Loaded test configuration from {}", path.display());

        Ok(Self {
            authentication: file.authentication,
            database_url,
        })
    }
}

impl ExpiresIn {
    fn from_env_value(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(seconds) if seconds.is_finite() => ExpiresIn::Seconds(seconds),
            _ => ExpiresIn::Span(value.to_string()),
        }
    }

    /// Lifetime as a duration, truncated to whole seconds.
    pub fn to_duration(&self) -> Result<Duration, ConfigError> {
        let seconds = match self {
            ExpiresIn::Seconds(seconds) if seconds.is_finite() && *seconds >= 0.0 => {
                Some(seconds.floor() as i64)
            }
            ExpiresIn::Seconds(_) => None,
            ExpiresIn::Span(span) => {
                let millis = parse_span_millis(span)?;
                Some((millis / MILLIS_PER_SECOND).floor() as i64)
            }
        };

        seconds
            .and_then(Duration::try_seconds)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: EXPIRES_IN_KEY.to_string(),
                reason: format!("{:?} is out of range", self),
            })
    }
}

fn parse_span_millis(span: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: EXPIRES_IN_KEY.to_string(),
        reason: format!("{reason}: {span:?}"),
    };

    let trimmed = span.trim();
    let unit_start = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(unit_start);

    let value: f64 = number
        .parse()
        .map_err(|_| invalid("expected a number followed by an optional unit"))?;

    let unit = unit.trim().to_ascii_lowercase();
    let unit_millis = match unit.as_str() {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => MILLIS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MILLIS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MILLIS_PER_HOUR,
        "d" | "day" | "days" => MILLIS_PER_DAY,
        "w" | "week" | "weeks" => MILLIS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => MILLIS_PER_YEAR,
        _ => return Err(invalid("unknown time unit")),
    };

    Ok(value * unit_millis)
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
