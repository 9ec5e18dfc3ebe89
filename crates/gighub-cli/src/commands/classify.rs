use anyhow::Result;
use gighub_core::config::RootConfig;
use gighub_core::moderation::{ContentClassifier, ModerationVerdict};

pub fn run(config: &RootConfig, text: &str, json: bool) -> Result<()> {
    let classifier = ContentClassifier::from_settings(&config.moderation)?;
    let verdict = classifier.classify(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    match verdict {
        ModerationVerdict::Admitted => println!("admitted"),
        ModerationVerdict::Blocked {
            reasons,
            detected_patterns,
        } => {
            println!("blocked");
            for reason in &reasons {
                println!("  reason:   {reason}");
            }
            for pattern in &detected_patterns {
                println!("  detected: {pattern}");
            }
        }
    }

    Ok(())
}
