//! Error types and stable error codes.
//!
//! View logic itself has no failure modes by design; everything here happens
//! at the intake boundary, before a view is constructed. Codes are stable
//! across releases so scripts can match on them.

use std::path::PathBuf;

use thiserror::Error;

/// Stable machine-readable error codes surfaced in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Payload file exists but could not be read.
    PayloadUnreadable,
    /// Payload file read but is not a valid payload document.
    PayloadMalformed,
    /// User config file exists but could not be read.
    ConfigUnreadable,
    /// User config file read but is not valid TOML.
    ConfigMalformed,
    /// Unexpected internal failure.
    Internal,
}

impl ErrorCode {
    /// Stable code string, e.g. `E1001`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PayloadUnreadable => "E1001",
            Self::PayloadMalformed => "E1002",
            Self::ConfigUnreadable => "E1101",
            Self::ConfigMalformed => "E1102",
            Self::Internal => "E9001",
        }
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PayloadUnreadable => "payload file could not be read",
            Self::PayloadMalformed => "payload file is not valid JSON for this client",
            Self::ConfigUnreadable => "config file could not be read",
            Self::ConfigMalformed => "config file is not valid TOML",
            Self::Internal => "internal error",
        }
    }

    /// Suggested next step, when there is an obvious one.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::PayloadUnreadable => {
                Some("Check the path given with --payload or SHOPFRONT_PAYLOAD")
            }
            Self::PayloadMalformed => {
                Some("The payload must be a JSON object; see `sf orders --help` for the shape")
            }
            Self::ConfigMalformed => Some("Check the TOML syntax in shopfront/config.toml"),
            Self::ConfigUnreadable | Self::Internal => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Failures crossing the payload or config intake boundary.
#[derive(Debug, Error)]
pub enum ShopfrontError {
    /// The payload file exists but reading it failed.
    #[error("could not read payload file {}", path.display())]
    PayloadUnreadable {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The payload file did not parse as a payload document.
    #[error("malformed payload in {}", path.display())]
    PayloadMalformed {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The user config file exists but reading it failed.
    #[error("could not read config file {}", path.display())]
    ConfigUnreadable {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The user config file did not parse as TOML.
    #[error("malformed config in {}", path.display())]
    ConfigMalformed {
        /// Path that failed to parse.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: toml::de::Error,
    },
}

impl ShopfrontError {
    /// The stable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::PayloadUnreadable { .. } => ErrorCode::PayloadUnreadable,
            Self::PayloadMalformed { .. } => ErrorCode::PayloadMalformed,
            Self::ConfigUnreadable { .. } => ErrorCode::ConfigUnreadable,
            Self::ConfigMalformed { .. } => ErrorCode::ConfigMalformed,
        }
    }

    /// Suggested next step for the user, when there is one.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        self.error_code().hint().map(str::to_string)
    }
}
