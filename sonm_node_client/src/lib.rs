//! A SONM node API client.
#![deny(rust_2018_idioms, missing_debug_implementations, unreachable_pub)]
#![warn(
    missing_docs,
    clippy::todo,
    clippy::dbg_macro,
    clippy::clone_on_ref_ptr
)]
#![allow(clippy::missing_docs_in_private_items)]

pub use client::deals;

/// Builder for constructing connections for use with the various API clients
pub mod connection;

mod client;
