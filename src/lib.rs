pub mod classifier;
pub mod config;
pub mod error;
pub mod server;
pub mod ticket;

pub use error::{Error, Result};
