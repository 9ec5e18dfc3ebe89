use anyhow::Result;
use gighub_application::ConversationManager;
use gighub_core::conversation::ConversationSummary;

pub async fn run(manager: &ConversationManager) -> Result<()> {
    let summaries = manager.list_conversations().await?;
    if summaries.is_empty() {
        println!("No conversations.");
        return Ok(());
    }

    for summary in &summaries {
        println!("{}", format_summary(summary, None));
    }
    Ok(())
}

/// One line of the conversation list, marking the active entry.
pub fn format_summary(summary: &ConversationSummary, active_id: Option<&str>) -> String {
    let marker = if active_id == Some(summary.id.as_str()) {
        "*"
    } else {
        " "
    };
    let preview = match (&summary.last_timestamp, &summary.last_message) {
        (Some(timestamp), Some(message)) => format!("{timestamp}: {message}"),
        _ => "(no messages)".to_string(),
    };

    format!(
        "{marker} {id}  {name} ({role}) | {project}\n    {preview}",
        id = summary.id,
        name = summary.counterpart_name,
        role = summary.counterpart_role,
        project = summary.project_title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gighub_core::conversation::CounterpartRole;

    fn summary() -> ConversationSummary {
        ConversationSummary {
            id: "conv-1".to_string(),
            counterpart_name: "Maria Lopez".to_string(),
            counterpart_role: CounterpartRole::Client,
            project_title: "Landing page redesign".to_string(),
            last_message: Some("Any update?".to_string()),
            last_timestamp: Some("9:31 AM".to_string()),
            message_count: 3,
        }
    }

    #[test]
    fn test_format_marks_active_conversation() {
        let line = format_summary(&summary(), Some("conv-1"));
        assert!(line.starts_with("* conv-1  Maria Lopez (client) | Landing page redesign"));
        assert!(line.ends_with("9:31 AM: Any update?"));

        let line = format_summary(&summary(), Some("conv-2"));
        assert!(line.starts_with("  conv-1"));
    }
}
