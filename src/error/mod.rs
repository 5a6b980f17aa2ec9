//! Error Handling Module
//!
//! - Core error types (`ExchangeError`, `CapabilityError`, `ErrorCategory`)
//! - User-facing error summaries
//! - Conversions from reqwest and serde_json errors
//!
//! # Example
//!
//! ```rust,ignore
//! use tool_exchange::error::{ExchangeError, ErrorCategory};
//!
//! let error = ExchangeError::api_error(404, "Not found");
//! assert_eq!(error.category(), ErrorCategory::Client);
//! assert!(!error.is_retryable());
//! ```

mod conversions;
pub mod helpers;
pub mod types;

pub use helpers::*;
pub use types::*;
