//! Single-round tool-invocation exchange.
//!
//! 1. Send the user text with every capability declaration.
//! 2. If the model answers directly, return its text.
//! 3. Otherwise dispatch each requested invocation locally.
//! 4. Send the results back, correlated by invocation id, and return the
//!    text of that second response.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tool_exchange::prelude::*;
//!
//! let client = Arc::new(AnthropicBuilder::new().build()?);
//! let exchange = ToolExchange::new(
//!     client,
//!     Arc::new(CapabilitySet::standard()?),
//!     ExchangeOptions::default(),
//! );
//! let answer = exchange.process_query("I weigh 75 kg and I'm 180 cm tall. What's my BMI?").await?;
//! ```

mod orchestrator;
pub mod types;


pub use orchestrator::ToolExchange;
pub use types::{
    ExchangeEvent, ExchangeObserver, ExchangeOptions, ExchangeOutcome, ExchangeTranscript,
    InvocationRecord,
};
