//! sharebin CLI: create and fetch pastes from the command line.
//!
//! Set SHAREBIN_API_URL (or API_URL) to point at the paste service.

use std::fs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sharebin_api_client::ApiClient;
use sharebin_cli::commands::create::{self, CreateOutcome};
use sharebin_cli::commands::show::{self, ShowOutcome};
use sharebin_cli::platform::SystemPlatform;
use sharebin_cli::{editor, init_tracing, render, target};

#[derive(Parser)]
#[command(
    name = "sharebin",
    about = "Securely share code or text with expiration limits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a paste and print its share link
    #[command(alias = "new")]
    Create {
        /// Paste content (reads piped stdin when omitted)
        content: Option<String>,

        /// Read the content from a file
        #[arg(long, conflicts_with = "content")]
        file: Option<PathBuf>,

        /// Compose the content in $EDITOR
        #[arg(long, conflicts_with_all = ["content", "file"])]
        edit: bool,

        /// Expire the paste after this many seconds
        #[arg(long, value_name = "SECONDS")]
        ttl: Option<u64>,

        /// Expire the paste after this many views
        #[arg(long, value_name = "COUNT")]
        max_views: Option<u32>,

        /// Copy the share link to the clipboard
        #[arg(long)]
        copy: bool,

        /// Open the share link in the browser
        #[arg(long)]
        open: bool,

        /// Print the raw creation response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch a paste by id or share link
    #[command(alias = "view")]
    Show {
        /// Paste id or share link (…/p/<id>)
        target: String,

        /// Copy the paste content to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the content only
        #[arg(long, conflicts_with = "json")]
        raw: bool,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    dotenvy::dotenv().ok();

    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format!("Error: {err:#}").red());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let client = ApiClient::from_env().context("Failed to create API client")?;
    let platform = SystemPlatform;

    match cli.command {
        Commands::Create {
            content,
            file,
            edit,
            ttl,
            max_views,
            copy,
            open,
            json,
        } => {
            let content = resolve_content(content, file, edit)?;

            match create::run(&client, &content, ttl, max_views).await {
                CreateOutcome::Invalid { reason } => {
                    render::print_error(reason);
                    Ok(ExitCode::FAILURE)
                }
                CreateOutcome::Created(created) => {
                    if json {
                        render::print_json(&created)?;
                        create::share_actions(&platform, &created.url, copy, open)?;
                    } else {
                        render::print_created(&created.url);
                        for ack in create::share_actions(&platform, &created.url, copy, open)? {
                            render::print_hint(&ack);
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                CreateOutcome::Failed { message } => {
                    render::print_error(&message);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Show {
            target: raw_target,
            copy,
            raw,
            json,
        } => {
            let id = match target::resolve_paste_id(&raw_target) {
                Ok(id) => id,
                Err(err) => {
                    render::print_error(&format!("{err:#}"));
                    return Ok(ExitCode::FAILURE);
                }
            };

            match show::run(&client, &id).await {
                ShowOutcome::Loaded(paste) => {
                    if json {
                        render::print_json(&paste)?;
                    } else if raw {
                        render::print_content(&paste.content);
                    } else {
                        render::print_paste(&paste);
                    }

                    let acks = show::copy_actions(&platform, &paste.content, copy)?;
                    if !json && !raw {
                        for ack in acks {
                            render::print_hint(&ack);
                        }
                    }
                    Ok(ExitCode::SUCCESS)
                }
                ShowOutcome::NotFound => {
                    render::print_error(show::NOT_FOUND_MESSAGE);
                    render::print_hint("Create a new paste with `sharebin create`");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// Pick the paste content source: --file, then the positional argument, then
/// --edit, then piped stdin.
fn resolve_content(content: Option<String>, file: Option<PathBuf>, edit: bool) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    if let Some(content) = content {
        return Ok(content);
    }

    if edit {
        return editor::compose();
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    Ok(String::new())
}
