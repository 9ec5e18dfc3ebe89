use std::sync::Arc;

use anyhow::{Context, Result};
use gighub_application::{ConversationManager, SubmitOutcome};
use gighub_core::conversation::{Message, SessionEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use super::conversations::format_summary;

/// A line typed at the chat prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    List,
    Switch(&'a str),
    Help,
    Unknown(&'a str),
    Submit(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let Some(command) = line.trim().strip_prefix('/') else {
        return Input::Submit(line);
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));

    match name {
        "quit" | "exit" => Input::Quit,
        "list" => Input::List,
        "switch" if !arg.is_empty() => Input::Switch(arg),
        "help" => Input::Help,
        _ => Input::Unknown(command),
    }
}

fn format_message(message: &Message) -> String {
    format!(
        "[{}] {}: {}",
        message.timestamp, message.sender_display_name, message.content
    )
}

/// Opens `conversation_id`, prints its history, and starts echoing its events.
async fn open(manager: &ConversationManager, conversation_id: &str) -> Result<JoinHandle<()>> {
    let session = manager.select_conversation(conversation_id).await?;
    let conversation = session.conversation().await;
    let mut events = session.subscribe();

    println!(
        "--- {} ({}) | {} ---",
        conversation.counterpart_name, conversation.counterpart_role, conversation.project_title
    );
    for message in &conversation.messages {
        println!("{}", format_message(message));
    }
    if session.is_counterpart_typing().await {
        println!("{} is typing...", conversation.counterpart_name);
    }

    let counterpart_name = conversation.counterpart_name;
    Ok(tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(SessionEvent::MessageAppended { message, .. }) if !message.is_own => {
                    println!("{}", format_message(&message));
                }
                Ok(SessionEvent::TypingChanged {
                    is_typing: true, ..
                }) => println!("{counterpart_name} is typing..."),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "[CLI] Event printer lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }))
}

async fn print_list(manager: &ConversationManager) -> Result<()> {
    let active_id = manager.active_conversation_id().await;
    for summary in manager.list_conversations().await? {
        println!("{}", format_summary(&summary, active_id.as_deref()));
    }
    Ok(())
}

fn print_help() {
    println!("Type a message and press enter to send it.");
    println!("  /list          list conversations");
    println!("  /switch <id>   open another conversation");
    println!("  /quit          leave");
}

pub async fn run(manager: Arc<ConversationManager>, conversation: Option<String>) -> Result<()> {
    let initial = match conversation {
        Some(id) => id,
        None => manager
            .list_conversations()
            .await?
            .into_iter()
            .next()
            .map(|summary| summary.id)
            .context("No conversations available")?,
    };

    let mut printer = open(&manager, &initial).await?;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Quit => break,
            Input::List => print_list(&manager).await?,
            Input::Help => print_help(),
            Input::Unknown(command) => eprintln!("Unknown command: /{command}"),
            Input::Switch(id) => match open(&manager, id).await {
                Ok(next) => {
                    printer.abort();
                    printer = next;
                }
                Err(e) => eprintln!("{e}"),
            },
            Input::Submit(text) => match manager.submit(text).await? {
                SubmitOutcome::Accepted { message } => println!("{}", format_message(&message)),
                SubmitOutcome::Blocked { .. } => eprintln!("Edit your message and try again."),
                SubmitOutcome::Ignored => {}
            },
        }
    }

    printer.abort();
    manager.close_all().await;
    Ok(())
}
