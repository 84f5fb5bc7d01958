//! Companion chat - terminal front end
//!
//! Reads lines from stdin, hands them to the session runtime and prints the
//! companion's replies as they arrive.

use companion_chat::config::{self, ChatConfig};
use companion_chat::conversation::Sender;
use companion_chat::runtime::{spawn_session, ChatEvent, SystemClock};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(config::log_json_from_env());
    let config = ChatConfig::from_env();

    tracing::info!(time_unit = ?config.time_unit, seeded = config.seed.is_some(), "Starting session");
    let (handle, session) = spawn_session(&config, SystemClock);

    let mut events = handle.subscribe();
    let printer = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => render(&event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Display fell behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    println!("Say something! (/history to dump the transcript, /quit to leave)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/history" => {
                let history = handle.history().await;
                println!("{}", serde_json::to_string_pretty(&history)?);
            }
            _ => handle.submit(line.as_str()).await?,
        }
    }

    // A reply already in flight still lands before we exit
    drop(handle);
    session.await?;
    printer.await?;

    Ok(())
}

fn render(event: &ChatEvent) {
    match event {
        // The user's own line is already on screen
        ChatEvent::Message { message } if message.sender() == Sender::User => {}
        ChatEvent::Message { message } => println!("{}: {}", message.sender(), message.text()),
        ChatEvent::Typing { .. } => println!("companion is typing..."),
        ChatEvent::Idle => {}
    }
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "companion_chat=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
