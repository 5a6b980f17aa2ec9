//! # tool-exchange
//!
//! Single-round tool-use exchanges with the Anthropic Messages API.
//!
#![deny(unsafe_code)]

//! A query goes to the model together with the declarations of every local
//! capability. If the model answers directly, that text is the result. If it
//! asks for a capability, the request is dispatched locally and the outcome
//! is sent back once, correlated by invocation id, and the second response's
//! text is the result.
//!
//! The bundled capability is a body-mass-index calculator. The crate also
//! ships a small SQLite-backed company FAQ catalogue used by the
//! `faq-catalogue` binary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tool_exchange::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(AnthropicBuilder::new().build()?);
//!     let exchange = ToolExchange::new(
//!         client,
//!         Arc::new(CapabilitySet::standard()?),
//!         ExchangeOptions::default(),
//!     );
//!     let answer = exchange
//!         .process_query("I weigh 75 kg and I'm 180 cm tall. What's my BMI?")
//!         .await?;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```

pub mod capabilities;
pub mod client;
pub mod config;
pub mod error;
pub mod exchange;
pub mod faq;
pub mod telemetry;
pub mod types;

pub mod prelude {
    pub use crate::capabilities::{
        BmiCalculator, BmiCategory, BmiReport, Capability, CapabilityResult, CapabilitySet,
        compute_body_mass_index,
    };
    pub use crate::client::{AnthropicBuilder, AnthropicClient, MessagesApi};
    pub use crate::config::ExchangeConfig;
    pub use crate::error::{CapabilityError, ErrorCategory, ExchangeError};
    pub use crate::exchange::{ExchangeEvent, ExchangeOptions, ExchangeOutcome, ToolExchange};
    pub use crate::types::{CapabilitySpec, MessagesRequest, MessagesResponse, StopReason};
}
