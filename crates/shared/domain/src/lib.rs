//! # Domain Models
//!
//! Pure types shared by every crate: configuration models, the slice registry
//! and user-facing constants. Keep it lean: `serde` only, no I/O or logic.

pub mod config;
pub mod constants;
pub mod registry;
