//! Command-line client for the sharebin paste service.
//!
//! The binary wires three layers together: paste target resolution
//! ([`target`]), the create and show command flows ([`commands`]), and
//! terminal rendering ([`render`]). OS-level capabilities (clipboard,
//! browser) sit behind the [`platform::Platform`] trait so the command
//! flows stay testable.

pub mod commands;
pub mod editor;
pub mod platform;
pub mod render;
pub mod target;

/// Initialize tracing for CLI binaries. Diagnostics go to stderr so they
/// never mix with command output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
