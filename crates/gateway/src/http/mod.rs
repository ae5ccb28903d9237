//! Low-level HTTP transport wrapper
//!
//! Domain clients never touch reqwest directly; everything goes through
//! [`HttpClient`].

mod client;

pub use client::{HttpClient, HttpClientBuilder};
