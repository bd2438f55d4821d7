//! # Runtime
//!
//! Standard [Tokio](https://tokio.rs) runtime profile for the workspace binaries.
//!
//! The **event loop** profile is a single-threaded scheduler. Form sessions
//! mutate their state from one logical loop, so front-ends run on it.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[setorial_runtime::main(event_loop)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use setorial_derive::main;

use anyhow::Context;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
const MIN_STACK_SIZE: usize = 512 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;

/// Configuration for a current-thread Tokio runtime.
///
/// `thread_name` and `stack_size` apply to the blocking pool threads.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub thread_name: String,
    pub stack_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::event_loop()
    }
}

impl RuntimeConfig {
    /// Single-threaded profile for front-ends.
    #[must_use]
    pub fn event_loop() -> Self {
        Self {
            thread_name: "setorial-loop".to_owned(),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }

    #[must_use = "Customize the stack size for blocking threads"]
    pub const fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = clamp_stack_size(size);
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.thread_name = name;
        }
        self
    }
}

const fn clamp_stack_size(size: usize) -> usize {
    if size < MIN_STACK_SIZE {
        MIN_STACK_SIZE
    } else if size > MAX_STACK_SIZE {
        MAX_STACK_SIZE
    } else {
        size
    }
}

/// Builds a runtime with timers and I/O enabled from `config`.
///
/// # Errors
///
/// Returns an error when Tokio cannot create the runtime (typically the OS
/// refusing to set up the I/O driver).
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    Builder::new_current_thread()
        .thread_name(&config.thread_name)
        .thread_stack_size(clamp_stack_size(config.stack_size))
        .enable_all()
        .build()
        .context("Failed to initialize runtime")
}
