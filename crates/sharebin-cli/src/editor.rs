//! Compose paste content in the user's editor.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{self, Command};

use anyhow::{bail, Context, Result};

/// Gets the editor command from the environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
fn editor_command() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        let found = Command::new("which")
            .arg(fallback)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);
        if found {
            return Ok(fallback.to_string());
        }
    }

    bail!("No editor found. Set $EDITOR")
}

/// One buffer per invocation; concurrent composes must not truncate each
/// other's file.
fn buffer_path() -> PathBuf {
    env::temp_dir().join(format!("sharebin_paste_{}.txt", process::id()))
}

/// Opens an empty buffer in the user's editor, waits for it to close, and
/// returns whatever was written. A non-zero editor exit aborts the paste.
pub fn compose() -> Result<String> {
    let editor = editor_command()?;
    let path = buffer_path();
    fs::write(&path, "").context("Failed to create the paste buffer")?;

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to launch editor '{editor}'"))?;

    if !status.success() {
        let _ = fs::remove_file(&path);
        bail!("Editor '{editor}' exited with non-zero status");
    }

    let content = fs::read_to_string(&path).context("Failed to read the paste buffer")?;
    let _ = fs::remove_file(&path);
    Ok(content)
}
