//! Wire types shared by the client and the exchange.

pub mod chat;
pub mod tools;

pub use chat::{
    ContentBlock, Message, MessageContent, MessagesRequest, MessagesResponse, ResponseBlock,
    Role, StopReason, ToolResult, ToolUse, Usage,
};
pub use tools::CapabilitySpec;
