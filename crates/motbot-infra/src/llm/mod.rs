//! Generation-service client.

pub mod openai;

pub use openai::OpenAiChatModel;
