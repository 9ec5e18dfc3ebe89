use gighub_core::conversation::{ConversationRepository, CounterpartRole};
use gighub_infrastructure::TomlConversationRepository;
use tempfile::TempDir;

const FIXTURE: &str = r#"
[[conversation]]
id = "conv-1"
counterpart_id = "client-7"
counterpart_name = "Maria Lopez"
counterpart_role = "client"
project_title = "Landing page redesign"

[[conversation.message]]
sender_id = "client-7"
sender_display_name = "Maria Lopez"
content = "Could you share a rough timeline?"
timestamp = "9:31 AM"

[[conversation.message]]
sender_id = "current-user"
sender_display_name = "You"
content = "Two weeks for the first pass."
timestamp = "9:40 AM"

[[conversation]]
id = "conv-2"
counterpart_id = "freelancer-3"
counterpart_name = "Dev Patel"
counterpart_role = "freelancer"
project_title = "Logo and brand kit"
"#;

fn write_fixture(dir: &TempDir, content: &str) -> TomlConversationRepository {
    let path = dir.path().join("conversations.toml");
    std::fs::write(&path, content).unwrap();
    TomlConversationRepository::with_path(path)
}

#[tokio::test]
async fn test_list_all_preserves_file_order() {
    let temp_dir = TempDir::new().unwrap();
    let repo = write_fixture(&temp_dir, FIXTURE);

    let conversations = repo.list_all().await.expect("Should load fixture");
    assert_eq!(conversations.len(), 2);
    assert_eq!(conversations[0].id, "conv-1");
    assert_eq!(conversations[0].messages.len(), 2);
    assert_eq!(conversations[1].counterpart_role, CounterpartRole::Freelancer);
    assert!(conversations[1].messages.is_empty());
}

#[tokio::test]
async fn test_find_by_id() {
    let temp_dir = TempDir::new().unwrap();
    let repo = write_fixture(&temp_dir, FIXTURE);

    let conversation = repo.find_by_id("conv-1").await.unwrap().unwrap();
    assert_eq!(conversation.counterpart_name, "Maria Lopez");
    assert_eq!(
        conversation.messages[1].content,
        "Two weeks for the first pass."
    );

    assert!(repo.find_by_id("conv-9").await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_fixture_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlConversationRepository::with_path(temp_dir.path().join("nope.toml"));

    let err = repo.list_all().await.unwrap_err();
    assert!(err.is_io());
}

#[tokio::test]
async fn test_malformed_fixture_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let repo = write_fixture(&temp_dir, "[[conversation]]\nid = 3\n");

    let err = repo.list_all().await.unwrap_err();
    assert!(err.is_serialization());
}
