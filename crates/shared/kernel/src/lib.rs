//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it re-exports the domain and provides the
//! layered configuration loader.
//!
//! ## Config loading
//! ```rust,no_run
//! use setorial_kernel::config::load_config;
//! use setorial_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("setorial")).unwrap_or_default();
//! ```

pub mod config;

pub use setorial_domain as domain;
