//! Terminal rendering for the command flows.

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use sharebin_core::Paste;

/// Shown in place of a count when the backend reports no view limit.
const UNBOUNDED_VIEWS: &str = "∞";

pub fn print_created(url: &str) {
    println!("{}", "Paste Created Successfully!".green().bold());
    println!("{url}");
}

pub fn print_paste(paste: &Paste) {
    println!("{}", paste_meta(paste).dimmed());
    println!();
    print_content(&paste.content);
}

/// Print the content exactly, without introducing a double newline when the
/// paste already ends with one.
pub fn print_content(content: &str) {
    if content.ends_with('\n') {
        print!("{content}");
    } else {
        println!("{content}");
    }
}

fn paste_meta(paste: &Paste) -> String {
    let views = match paste.remaining_views {
        Some(count) => count.to_string(),
        None => UNBOUNDED_VIEWS.to_string(),
    };

    let mut meta = format!("{views} views left");
    if paste.expires_at.is_some() {
        meta.push_str("  ·  Expires soon");
    }
    meta
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

pub fn print_hint(message: &str) {
    println!("{}", message.dimmed());
}

pub fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}
