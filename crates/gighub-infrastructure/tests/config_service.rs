use gighub_core::user::IdentityProvider;
use gighub_infrastructure::{ConfigBasedIdentityProvider, ConfigService};
use tempfile::TempDir;

const CONFIG: &str = r#"
[user]
id = "user-42"
display_name = "Sam"

[messaging]
reply_delay_ms = 250
reply_pool = ["On it!", "Sounds good."]

[moderation]
disabled_rules = ["discord"]
extra_phrases = ["ping me later"]
social_profiles = false

[logging]
level = "debug"
"#;

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();

    let config = ConfigService::with_path(path).get_config().unwrap();
    assert_eq!(config.user.id, "user-42");
    assert_eq!(config.messaging.reply_delay_ms, 250);
    assert_eq!(config.messaging.reply_pool, vec!["On it!", "Sounds good."]);
    assert_eq!(config.moderation.disabled_rules, vec!["discord"]);
    assert!(!config.moderation.social_profiles);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_config_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[user]\ndisplay_name = \"Sam\"\n").unwrap();

    let config = ConfigService::with_path(path).get_config().unwrap();
    assert_eq!(config.user.display_name, "Sam");
    assert_eq!(config.user.id, "current-user");
    assert!(config.moderation.social_profiles);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_cache_until_invalidated() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[user]\ndisplay_name = \"Sam\"\n").unwrap();

    let service = ConfigService::with_path(&path);
    assert_eq!(service.get_config().unwrap().user.display_name, "Sam");

    std::fs::write(&path, "[user]\ndisplay_name = \"Alex\"\n").unwrap();
    assert_eq!(service.get_config().unwrap().user.display_name, "Sam");

    service.invalidate_cache();
    assert_eq!(service.get_config().unwrap().user.display_name, "Alex");
}

#[test]
fn test_identity_provider_reads_user_section() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();

    let provider = ConfigBasedIdentityProvider::new(ConfigService::with_path(path));
    assert_eq!(provider.current_user_id(), "user-42");
    assert_eq!(provider.current_user_display_name(), "Sam");
}

#[test]
fn test_identity_provider_falls_back_on_bad_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "not = [valid").unwrap();

    let provider = ConfigBasedIdentityProvider::new(ConfigService::with_path(path));
    assert_eq!(provider.current_user_id(), "current-user");
}
