//! Core domain logic for Skinsmith: the VDF codec, the on-disk theme
//! store, the skin application engine, and the live preview session.
//!
//! Everything in this crate is synchronous and HTTP-free. The API crate
//! wraps the heavier filesystem operations in `spawn_blocking`.

pub mod engine;
pub mod error;
mod fsops;
pub mod manifest;
pub mod preview;
pub mod steam;
pub mod store;
pub mod vdf;
