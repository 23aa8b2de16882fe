//! Sign-in form assembly.
//!
//! Credential checking belongs to the host. The client's whole job is to
//! declare the form and hand back a submission: the hidden correlation
//! fields it received are forwarded unchanged, in order, with the
//! credentials appended. Nothing here inspects or rewrites those values.

use serde::{Deserialize, Serialize};

use crate::payload::LoginPayload;

/// HTTP method the sign-in form posts with.
pub const FORM_METHOD: &str = "post";

/// Referer value the host expects alongside the login post.
const WP_HTTP_REFERER: &str = "/my-account/";

/// One named form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Wire name of the field.
    pub name: String,
    /// Field value, opaque to the client.
    pub value: String,
}

impl FormField {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// Declarative sign-in form built from the host payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    /// Always [`FORM_METHOD`].
    pub method: &'static str,
    /// Endpoint the form posts to.
    pub action: String,
    /// Hidden fields in the order the host expects them.
    pub hidden: Vec<FormField>,
}

/// A filled-in form, ready for the host to post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    /// Always [`FORM_METHOD`].
    pub method: &'static str,
    /// Endpoint the form posts to.
    pub action: String,
    /// Hidden fields first, untouched, then the credentials.
    pub fields: Vec<FormField>,
}

impl LoginForm {
    /// Build the form from the host payload.
    ///
    /// Hidden field names and order are the host's wire contract; their
    /// values come straight from the payload.
    #[must_use]
    pub fn from_payload(payload: &LoginPayload) -> Self {
        Self {
            method: FORM_METHOD,
            action: payload.login_url.clone(),
            hidden: vec![
                FormField::new("woocommerce-login-nonce", payload.nonce.clone()),
                FormField::new("_wp_http_referer", WP_HTTP_REFERER),
                FormField::new("redirect", payload.redirect.clone()),
                FormField::new("login", "1"),
            ],
        }
    }

    /// The submission that posting this form with `username` and `password`
    /// produces.
    #[must_use]
    pub fn submission(&self, username: &str, password: &str) -> FormSubmission {
        let mut fields = self.hidden.clone();
        fields.push(FormField::new("username", username));
        fields.push(FormField::new("password", password));
        FormSubmission {
            method: self.method,
            action: self.action.clone(),
            fields,
        }
    }
}
