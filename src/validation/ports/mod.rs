//! Port trait definitions for the validation subsystem.
//!
//! The scheduler depends on [`validator::RowValidator`] rather than on the
//! schema directly, so alternative validators can be plugged in without
//! touching the session machinery.

pub mod validator;

pub use validator::{RowValidator, ScanConfig};
