use clap::{Parser, Subcommand};
use delayed_notifier::client::{Dispatcher, DEFAULT_API_URL};
use std::io;

#[derive(Parser)]
#[command(name = "notifyctl", about = "Command-line front end for the notify API")]
struct Cli {
    /// Base URL of the notify endpoint
    #[arg(long, env = "NOTIFIER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Schedule a notification
    Create {
        recipient_id: i64,
        /// Delivery date, e.g. "2024-01-01 10:00:00"
        date: String,
        text: String,
    },
    /// Get the delivery status of a notification
    Status { id: String },
    /// Cancel a scheduled notification
    Delete { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut dispatcher = Dispatcher::new(cli.api_url, io::stdout());

    match cli.command {
        Command::Create {
            recipient_id,
            date,
            text,
        } => dispatcher.create(recipient_id, &date, &text).await?,
        Command::Status { id } => dispatcher.status(&id).await?,
        Command::Delete { id } => dispatcher.delete(&id).await?,
    }

    Ok(())
}
