//! HTTP client construction and reading submission.
mod client;
mod send;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::build_client;
pub use send::send_reading;
