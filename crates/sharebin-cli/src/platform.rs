//! OS capabilities the command flows depend on.
//!
//! Clipboard access and URL opening go through the [`Platform`] trait so
//! tests can swap in a recording double instead of touching the host.

use std::io::Write;
use std::process::{Child, Command, Stdio};

use anyhow::{bail, Context, Result};

pub trait Platform {
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Shells out to the host OS tools.
/// - macOS: pbcopy / open
/// - Linux: xclip or xsel / xdg-open
/// - Windows: clip / cmd start
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            let child = spawn_with_stdin(Command::new("pbcopy"))?;
            feed_clipboard(child, text, "pbcopy")
        }

        #[cfg(target_os = "linux")]
        {
            // xclip first, xsel when xclip is not installed.
            let mut xclip = Command::new("xclip");
            xclip.args(["-selection", "clipboard"]);
            match spawn_with_stdin(xclip) {
                Ok(child) => feed_clipboard(child, text, "xclip"),
                Err(_) => {
                    let mut xsel = Command::new("xsel");
                    xsel.args(["--clipboard", "--input"]);
                    let child = spawn_with_stdin(xsel)
                        .context("No clipboard tool found. Install xclip or xsel")?;
                    feed_clipboard(child, text, "xsel")
                }
            }
        }

        #[cfg(target_os = "windows")]
        {
            let child = spawn_with_stdin(Command::new("clip"))?;
            feed_clipboard(child, text, "clip")
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            bail!("Clipboard is not supported on this platform")
        }
    }

    fn open_url(&self, url: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            run_opener(Command::new("open"), url)
        }

        #[cfg(target_os = "linux")]
        {
            run_opener(Command::new("xdg-open"), url)
        }

        #[cfg(target_os = "windows")]
        {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]);
            run_opener(command, url)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            bail!("Opening URLs is not supported on this platform")
        }
    }
}

fn spawn_with_stdin(mut command: Command) -> Result<Child> {
    let name = command.get_program().to_string_lossy().into_owned();
    command
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to run {name}"))
}

fn feed_clipboard(mut child: Child, text: &str, name: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {name}"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {name}"))?;

    if !status.success() {
        bail!("{name} exited with status {status}");
    }
    Ok(())
}

fn run_opener(mut command: Command, url: &str) -> Result<()> {
    let name = command.get_program().to_string_lossy().into_owned();
    let status = command
        .arg(url)
        .status()
        .with_context(|| format!("Failed to run {name}"))?;

    if !status.success() {
        bail!("{name} exited with status {status}");
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use anyhow::Result;

    use super::Platform;

    /// Records capability calls instead of touching the host OS.
    #[derive(Default)]
    pub(crate) struct RecordingPlatform {
        pub(crate) copied: Mutex<Vec<String>>,
        pub(crate) opened: Mutex<Vec<String>>,
    }

    impl Platform for RecordingPlatform {
        fn copy_to_clipboard(&self, text: &str) -> Result<()> {
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }

        fn open_url(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    /// Fails every capability call.
    pub(crate) struct FailingPlatform;

    impl Platform for FailingPlatform {
        fn copy_to_clipboard(&self, _text: &str) -> Result<()> {
            anyhow::bail!("clipboard unavailable")
        }

        fn open_url(&self, _url: &str) -> Result<()> {
            anyhow::bail!("no browser available")
        }
    }
}
