//! wikictl CLI
//!
//! Non-interactive front-end for the wiki resource endpoint, for scripting
//! the same create/update/delete flows the TUI drives interactively.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wikictl_api::requests::{DeleteWikiRequest, SaveWikiRequest};
use wikictl_api::responses::{ActionResponse, ResponseShape, public_wiki_url};
use wikictl_client::HttpClient;

#[derive(Parser)]
#[command(name = "wikictl")]
#[command(about = "Manage a personal wiki from the command line", long_about = None)]
struct Cli {
    /// Wiki server address
    #[arg(short, long, default_value = "http://localhost:3000", global = true)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new wiki
    Create {
        username: String,
        password: String,
        /// Markdown content; read from --file or stdin when omitted
        content: Option<String>,
        /// Read the markdown content from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Update an existing wiki
    Update {
        username: String,
        password: String,
        /// Markdown content; read from --file or stdin when omitted
        content: Option<String>,
        /// Read the markdown content from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a wiki
    Delete { username: String, password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = HttpClient::new(&cli.server)?;

    match cli.command {
        Commands::Create {
            username,
            password,
            content,
            file,
        } => {
            let content = read_content(content, file)?;
            let request = SaveWikiRequest {
                username: username.clone(),
                content,
                password,
            };
            info!(?request, "creating wiki");
            let body = client.create_wiki(&request).await?;
            report_save(&username, &body)
        }
        Commands::Update {
            username,
            password,
            content,
            file,
        } => {
            let content = read_content(content, file)?;
            let request = SaveWikiRequest {
                username: username.clone(),
                content,
                password,
            };
            info!(?request, "updating wiki");
            let body = client.update_wiki(&request).await?;
            report_save(&username, &body)
        }
        Commands::Delete { username, password } => {
            let request = DeleteWikiRequest { username, password };
            info!(?request, "deleting wiki");
            let body = client.delete_wiki(&request).await?;
            report_delete(&body)
        }
    }
}

/// Resolve the markdown content from the argument, a file, or stdin.
fn read_content(content: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(content) = content {
        return Ok(content);
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn report_save(username: &str, body: &Value) -> Result<()> {
    match ActionResponse::from_value(body, ResponseShape::Save) {
        ActionResponse::Parsed(outcome) if outcome.success => {
            println!("Wiki saved: {}", public_wiki_url(username));
            Ok(())
        }
        ActionResponse::Parsed(outcome) => Err(eyre!(
            "server reported failure: {}",
            outcome.error.unwrap_or_default()
        )),
        ActionResponse::Malformed => Err(eyre!("malformed response from server")),
    }
}

fn report_delete(body: &Value) -> Result<()> {
    match ActionResponse::from_value(body, ResponseShape::Delete) {
        ActionResponse::Parsed(outcome) if outcome.success => {
            println!("Wiki deleted");
            Ok(())
        }
        ActionResponse::Parsed(outcome) => Err(eyre!(
            "server reported failure: {}",
            outcome.error.unwrap_or_default()
        )),
        ActionResponse::Malformed => Err(eyre!("malformed response from server")),
    }
}
