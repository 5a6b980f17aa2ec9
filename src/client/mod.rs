//! Remote text-generation service.
//!
//! [`MessagesApi`] is the seam the exchange talks through; [`AnthropicClient`]
//! is the HTTP implementation. Tests substitute their own implementation.

mod anthropic;
mod builder;
pub mod errors;
pub mod headers;

use async_trait::async_trait;

use crate::error::ExchangeError;
use crate::types::{MessagesRequest, MessagesResponse};

pub use anthropic::AnthropicClient;
pub use builder::AnthropicBuilder;

/// One request/response round trip with the remote service.
#[async_trait]
pub trait MessagesApi: Send + Sync {
    async fn create_message(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, ExchangeError>;
}
