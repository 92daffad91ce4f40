//! Macros for application messaging and logging.
//!
//! Each macro routes a [`Message`](super::Message) either to `tracing` or to
//! plain console output, depending on whether debug mode is on.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is enabled when either environment variable is set:
//! - **`ORGNICE_DEBUG`**: Application-specific debug flag
//! - **`RUST_LOG`**: Standard Rust logging configuration
//!
//! The check runs once and is cached.
//!
//! ## Output Routing
//!
//! ```text
//! msg_print!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                              └─no───▶ println!
//! ```
//!
//! `msg_debug!` is silent outside debug mode, which makes it the macro the
//! library itself uses; the console-facing macros belong to the command layer.
//!
//! ## Usage Examples
//!
//! ```rust
//! use orgnice::{msg_debug, msg_success};
//! use orgnice::libs::messages::Message;
//!
//! msg_success!(Message::TaskMarkedDone(4));
//! msg_debug!(Message::TaskUpdated(4));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `ORGNICE_DEBUG` or `RUST_LOG` is set.
///
/// The environment is read on first call only; later calls return the
/// cached answer.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("ORGNICE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
///
/// - **Debug Mode**: Uses `tracing::info!`
/// - **Normal Mode**: Uses `println!`
///
/// ```rust
/// use orgnice::msg_print;
/// use orgnice::libs::messages::Message;
///
/// msg_print!(Message::TasksNotFound);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
///
/// Warnings go to stderr outside debug mode so they never mix with listings
/// printed on stdout.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

/// Logs a debug message with 🔍 prefix. Silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}
