//! OAuth2 client-credentials token exchange.

pub mod token;

pub use token::{AccessToken, TokenClient};
