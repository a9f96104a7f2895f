//! Terminal client for the Gemini chat service.
//!
//! Runs an interactive REPL by default; `send` fires a single message and
//! `key` stores the API key used for requests.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use chat_core::{Config, Message, Sender};
use chat_session::{ChatSession, SubmitStatus};
use clap::{Parser, Subcommand};
use colored::Colorize;
use credential_store::{CredentialStore, FileCredentialStore};
use gemini_client::GeminiClient;

#[derive(Parser)]
#[command(name = "gemini-chat")]
#[command(about = "Chat with the Gemini generative language API", version)]
struct Cli {
    /// Override the API base URL from config.
    #[arg(long)]
    api_base: Option<String>,

    /// Override the model name from config.
    #[arg(long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (default)
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message text to send
        message: String,
    },
    /// Store the API key used for requests
    Key {
        /// API key value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::new();

    let mut client = GeminiClient::new();
    if let Some(base) = cli.api_base.or(config.api_base) {
        client = client.with_api_base(base);
    }
    if let Some(model) = cli.model.or(config.model) {
        client = client.with_model(model);
    }

    let data_dir = chat_core::paths::ensure_app_data_dir()?;
    log::debug!("Using data directory: {}", data_dir.display());
    let store = FileCredentialStore::new(data_dir);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(client, store).await,
        Commands::Send { message } => send_message(client, store, &message).await,
        Commands::Key { value } => store_key(store, &value).await,
    }
}

/// Interactive chat loop. Reads lines from stdin until EOF or an exit command.
async fn run_chat(client: GeminiClient, store: FileCredentialStore) -> Result<()> {
    let session = ChatSession::new(Arc::new(client), Arc::new(store.clone()));

    println!("{}", "🤖 Gemini Chat".cyan().bold());
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave, '/key <value>' to store an API key.".dimmed()
    );
    println!();

    let mut rendered = 0usize;

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            break;
        }

        // Only the line ending comes off here; the session keeps the user's
        // text verbatim, including surrounding spaces.
        let line = input.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();

        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        if let Some(value) = trimmed.strip_prefix("/key ") {
            store.set(value).await?;
            println!("{}", "API key saved.".green());
            continue;
        }

        if session.submit(line).await == SubmitStatus::Ignored {
            continue;
        }

        let transcript = session.snapshot().await;
        for entry in &transcript[rendered..] {
            if entry.sender == Sender::Bot {
                render_reply(entry);
            }
        }
        rendered = transcript.len();
        println!();
    }

    println!("{}", "👋 Goodbye!".cyan());
    Ok(())
}

/// One-shot mode: submit a single message and print the reply entry.
async fn send_message(
    client: GeminiClient,
    store: FileCredentialStore,
    message: &str,
) -> Result<()> {
    let session = ChatSession::new(Arc::new(client), Arc::new(store));

    if session.submit(message).await == SubmitStatus::Ignored {
        println!("{}", "Nothing to send.".yellow());
        return Ok(());
    }

    let transcript = session.snapshot().await;
    if let Some(reply) = transcript.iter().rev().find(|m| m.sender == Sender::Bot) {
        render_reply(reply);
    }
    Ok(())
}

async fn store_key(store: FileCredentialStore, value: &str) -> Result<()> {
    store.set(value).await?;
    println!("{}", "API key saved.".green());
    Ok(())
}

/// Failed exchanges land in the transcript as "Error: ..." entries; paint
/// those red and everything else green.
fn render_reply(entry: &Message) {
    if entry.text.starts_with("Error: ") {
        println!("{} {}", "Bot:".red().bold(), entry.text.red());
    } else {
        println!("{} {}", "Bot:".green().bold(), entry.text);
    }
}
