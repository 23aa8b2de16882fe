//! Core domain for the shopfront terminal client.
//!
//! This crate owns the pieces the views are built from: order records and
//! status classification, the expansion state machine, currency display
//! formatting, host payload intake, the sign-in form, and user
//! configuration. It renders nothing and performs no IO beyond reading the
//! payload and config files it is pointed at.
//!
//! # Conventions
//!
//! - View-facing logic is total: classification and expansion are defined
//!   for every input and never fail.
//! - Fallible intake returns [`ShopfrontError`] carrying a stable
//!   [`ErrorCode`].
//! - Host-supplied values (dates, statuses, hidden form fields) pass
//!   through verbatim; the client interprets, it does not rewrite.

pub mod config;
pub mod error;
pub mod expand;
pub mod login;
pub mod model;
pub mod money;
pub mod payload;

pub use error::{ErrorCode, ShopfrontError};
pub use expand::ExpansionState;
pub use login::{FormField, FormSubmission, LoginForm};
pub use model::{Order, OrderId, OrderItem, StatusCategory};
pub use money::format_amount;
pub use payload::{HostPayload, LoginPayload, OrdersPayload};
