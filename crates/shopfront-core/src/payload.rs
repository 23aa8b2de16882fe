//! Host payload intake.
//!
//! The host hands the client one JSON document carrying the data each view
//! needs. The path is an explicit parameter; there is no ambient global to
//! consult. A missing file is the valid empty state, not an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ShopfrontError;
use crate::model::Order;

/// Data for the order history view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdersPayload {
    /// Orders in display order. A missing key means no orders.
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Data for the sign-in view.
///
/// Field defaults mirror the host page's fallback values, so a payload
/// that omits the login block still produces a usable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    /// Endpoint the login form posts to.
    #[serde(default = "default_login_url")]
    pub login_url: String,
    /// One-time token, forwarded untouched as a hidden field.
    #[serde(default)]
    pub nonce: String,
    /// Where the host sends the user after sign-in.
    #[serde(default = "default_redirect")]
    pub redirect: String,
}

impl Default for LoginPayload {
    fn default() -> Self {
        Self {
            login_url: default_login_url(),
            nonce: String::new(),
            redirect: default_redirect(),
        }
    }
}

fn default_login_url() -> String {
    "/my-account/".to_string()
}

fn default_redirect() -> String {
    "/".to_string()
}

/// Everything the host supplies, one document covering both views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostPayload {
    /// Order history data.
    #[serde(default)]
    pub orders: OrdersPayload,
    /// Sign-in form data.
    #[serde(default)]
    pub login: LoginPayload,
}

/// Load the host payload from `path`.
///
/// A missing file yields the default payload: no orders and the login
/// fallbacks.
///
/// # Errors
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_payload(path: &Path) -> Result<HostPayload, ShopfrontError> {
    if !path.exists() {
        debug!(path = %path.display(), "payload file missing, using empty payload");
        return Ok(HostPayload::default());
    }
    let content =
        std::fs::read_to_string(path).map_err(|source| ShopfrontError::PayloadUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let payload: HostPayload =
        serde_json::from_str(&content).map_err(|source| ShopfrontError::PayloadMalformed {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(orders = payload.orders.orders.len(), "loaded host payload");
    Ok(payload)
}
