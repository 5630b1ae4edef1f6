//! Vault configuration failures surface as errors

use wordcard::config::{load_config, update_config, Config, ConfigUpdate};
use wordcard::{VaultError, WordcardManager};

#[test]
fn test_unset_vault_path_is_configuration_error() {
    let result = WordcardManager::new(Config::default());
    assert!(matches!(result, Err(VaultError::Configuration(_))));
}

#[test]
fn test_missing_vault_dir_is_configuration_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let mut config = Config::default();
    config.vault.path = Some(temp_dir.path().join("missing").display().to_string());

    let result = WordcardManager::new(config);
    assert!(matches!(result, Err(VaultError::Configuration(_))));
}

#[test]
fn test_configured_vault_opens_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_path = temp_dir.path().join("wordcard").join("config.toml");

    update_config(
        &config_path,
        &ConfigUpdate {
            vault_path: Some(temp_dir.path().display().to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert!(config.is_vault_configured());
    assert!(WordcardManager::new(config).is_ok());
}
