//! Status classification.
//!
//! Raw status strings stay free-form; the only interpretation the client
//! applies is mapping them onto a small set of visual categories. The
//! mapping is total: any string, including the empty one, lands in a
//! category and nothing ever fails to classify.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual category derived from an order's raw status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Fulfilled orders (`completed`).
    Success,
    /// Orders moving through fulfillment (`processing`).
    Info,
    /// Orders awaiting action (`pending`).
    Warning,
    /// Orders paused by the store (`on-hold`).
    Caution,
    /// Terminal failures (`cancelled`, `failed`).
    Error,
    /// Everything the client does not recognize.
    Neutral,
}

impl StatusCategory {
    /// Stable lowercase name used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Caution => "caution",
            Self::Error => "error",
            Self::Neutral => "neutral",
        }
    }

    /// Classify a raw status string.
    ///
    /// Matching is exact apart from ASCII case: the string is lowercased
    /// and compared as-is, so padded or decorated statuses stay
    /// unrecognized. Unrecognized statuses map to
    /// [`StatusCategory::Neutral`] so new upstream statuses degrade to an
    /// unstyled display, never an error.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "completed" => Self::Success,
            "processing" => Self::Info,
            "pending" => Self::Warning,
            "on-hold" => Self::Caution,
            "cancelled" | "failed" => Self::Error,
            _ => Self::Neutral,
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
