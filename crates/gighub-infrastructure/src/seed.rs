//! Demo marketplace threads.

use gighub_core::conversation::{Conversation, CounterpartRole, Message};

struct SeedMessage {
    from_counterpart: bool,
    content: &'static str,
    timestamp: &'static str,
}

struct SeedThread {
    id: &'static str,
    counterpart_id: &'static str,
    counterpart_name: &'static str,
    counterpart_role: CounterpartRole,
    project_title: &'static str,
    messages: &'static [SeedMessage],
}

const fn them(content: &'static str, timestamp: &'static str) -> SeedMessage {
    SeedMessage {
        from_counterpart: true,
        content,
        timestamp,
    }
}

const fn me(content: &'static str, timestamp: &'static str) -> SeedMessage {
    SeedMessage {
        from_counterpart: false,
        content,
        timestamp,
    }
}

const THREADS: &[SeedThread] = &[
    SeedThread {
        id: "conv-landing-page",
        counterpart_id: "client-maria",
        counterpart_name: "Maria Lopez",
        counterpart_role: CounterpartRole::Client,
        project_title: "Landing page redesign",
        messages: &[
            them("Hi! I saw your portfolio and loved the fintech work.", "9:12 AM"),
            me("Thanks Maria! Happy to help with the redesign.", "9:20 AM"),
            them("Great. Could you share a rough timeline?", "9:31 AM"),
        ],
    },
    SeedThread {
        id: "conv-logo",
        counterpart_id: "freelancer-dev",
        counterpart_name: "Dev Patel",
        counterpart_role: CounterpartRole::Freelancer,
        project_title: "Logo and brand kit",
        messages: &[
            me("Hi Dev, the brief is attached to the job post.", "Yesterday"),
            them("Got it. I'll send three concepts by Thursday.", "Yesterday"),
        ],
    },
    SeedThread {
        id: "conv-api",
        counterpart_id: "client-northwind",
        counterpart_name: "Northwind Ops",
        counterpart_role: CounterpartRole::Client,
        project_title: "Inventory API integration",
        messages: &[them(
            "We need the sync job running before the end of the month.",
            "Mon",
        )],
    },
];

/// Builds the demo threads as seen by `user_id`.
pub(crate) fn demo_conversations(user_id: &str, user_display_name: &str) -> Vec<Conversation> {
    THREADS
        .iter()
        .map(|thread| {
            let messages = thread
                .messages
                .iter()
                .map(|seed| {
                    let mut message = if seed.from_counterpart {
                        Message::new(
                            thread.counterpart_id,
                            thread.counterpart_name,
                            seed.content,
                            false,
                        )
                    } else {
                        Message::new(user_id, user_display_name, seed.content, true)
                    };
                    message.timestamp = seed.timestamp.to_string();
                    message
                })
                .collect();

            Conversation {
                id: thread.id.to_string(),
                counterpart_id: thread.counterpart_id.to_string(),
                counterpart_name: thread.counterpart_name.to_string(),
                counterpart_role: thread.counterpart_role,
                project_title: thread.project_title.to_string(),
                messages,
            }
        })
        .collect()
}
