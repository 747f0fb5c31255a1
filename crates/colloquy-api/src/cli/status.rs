//! System status command.

use anyhow::Result;
use console::style;

use colloquy_core::conversation::ConversationRepository;
use colloquy_core::responder::ResponderRepository;

use crate::state::AppState;

/// Display store counts, data directory, and version.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let responders = state.store.responders().list().await?;
    let conversations = state.store.conversations().count_conversations().await?;
    let messages = state.store.conversations().count_all_messages().await?;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "responders": responders.len(),
            "conversations": conversations,
            "messages": messages,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Colloquy v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  Data dir:      {}", state.data_dir.display());
    println!("  Responders:    {}", style(responders.len()).bold());
    for responder in &responders {
        println!(
            "    {} {} ({})",
            style("-").dim(),
            style(&responder.name).cyan(),
            responder.kind
        );
    }
    println!("  Conversations: {}", style(conversations).bold());
    println!("  Messages:      {}", style(messages).bold());
    println!();

    Ok(())
}
