// This crate deliberately does not use the same linting rules as the other crates because of all
// the generated code it contains that we don't have much control over.
#![allow(
    unused_imports,
    clippy::redundant_static_lifetimes,
    clippy::redundant_closure
)]

include!(concat!(env!("OUT_DIR"), "/sonm.rs"));

mod bigint;
mod timestamp;
