/// Humanitec API layer: client trait, HTTP implementation, errors.
pub mod client;
pub mod errors;
#[cfg(test)]
pub mod memory;

pub use client::{Client, Credentials, HttpClient};
pub use errors::ApiError;
#[cfg(test)]
pub use memory::MemoryClient;
