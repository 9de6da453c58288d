use std::path::PathBuf;

use super::*;

fn scratch_paths(tag: &str) -> StorePaths {
    let dir = std::env::temp_dir().join(format!("pls_test_{}_{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    StorePaths { config_dir: dir }
}

fn cleanup(paths: &StorePaths) {
    let _ = std::fs::remove_dir_all(&paths.config_dir);
}

fn entry(model: &str, prompt: &str, description: Option<&str>) -> AliasEntry {
    AliasEntry {
        model: model.to_string(),
        prompt: prompt.to_string(),
        description: description.map(String::from),
    }
}

#[test]
fn load_without_user_file_exposes_defaults() {
    let paths = scratch_paths("defaults");
    let store = AliasStore::load(&paths).unwrap();

    // Shipped defaults are present and none of them are overrides.
    assert!(store.get("commit").is_some());
    assert!(!store.is_override("commit"));
    assert!(!store.merged().is_empty());

    cleanup(&paths);
}

#[test]
fn add_then_list_then_remove() {
    let paths = scratch_paths("roundtrip");
    let mut store = AliasStore::load(&paths).unwrap();

    store
        .add("haiku", entry("llama3.2", "Write a haiku about:", Some("Haiku generator")))
        .unwrap();

    let merged = store.merged();
    let added = merged.get("haiku").unwrap();
    assert_eq!(added.model, "llama3.2");
    assert_eq!(added.description.as_deref(), Some("Haiku generator"));

    // A fresh load from the same paths sees the persisted entry.
    let reloaded = AliasStore::load(&paths).unwrap();
    assert!(reloaded.get("haiku").is_some());

    let mut store = reloaded;
    assert_eq!(store.remove("haiku").unwrap(), RemoveOutcome::Removed);
    assert!(store.get("haiku").is_none());
    assert!(!AliasStore::load(&paths).unwrap().merged().contains_key("haiku"));

    cleanup(&paths);
}

#[test]
fn user_entry_shadows_default_without_deleting_it() {
    let paths = scratch_paths("shadow");
    let mut store = AliasStore::load(&paths).unwrap();
    let default_model = store.get("commit").unwrap().model.clone();

    store
        .add("commit", entry("mixtral", "my commit prompt", None))
        .unwrap();
    assert_eq!(store.get("commit").unwrap().model, "mixtral");
    assert!(store.is_override("commit"));

    // Removing the override restores the built-in entry's effect.
    assert_eq!(store.remove("commit").unwrap(), RemoveOutcome::Removed);
    assert_eq!(store.get("commit").unwrap().model, default_model);

    cleanup(&paths);
}

#[test]
fn removing_a_builtin_is_refused() {
    let paths = scratch_paths("builtin");
    let mut store = AliasStore::load(&paths).unwrap();

    assert_eq!(store.remove("commit").unwrap(), RemoveOutcome::BuiltIn);
    assert!(store.get("commit").is_some());

    cleanup(&paths);
}

#[test]
fn removing_an_unknown_alias_reports_not_found() {
    let paths = scratch_paths("missing");
    let mut store = AliasStore::load(&paths).unwrap();

    assert_eq!(store.remove("nope").unwrap(), RemoveOutcome::NotFound);

    cleanup(&paths);
}

#[test]
fn user_file_holds_only_user_entries() {
    let paths = scratch_paths("subset");
    let mut store = AliasStore::load(&paths).unwrap();

    store.add("mine", entry("llama3", "p", None)).unwrap();

    let on_disk: AliasMap =
        serde_yaml::from_str(&std::fs::read_to_string(paths.user_prompts_file()).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 1);
    assert!(on_disk.contains_key("mine"));
    assert!(!on_disk.contains_key("commit"));

    cleanup(&paths);
}

#[test]
fn user_file_parse_error_is_reported() {
    let paths = scratch_paths("invalid");
    std::fs::write(paths.user_prompts_file(), "not: [valid: yaml").unwrap();

    assert!(AliasStore::load(&paths).is_err());

    cleanup(&paths);
}

#[test]
fn paths_compose_prompts_file() {
    let paths = StorePaths {
        config_dir: PathBuf::from("/tmp/pls"),
    };
    assert_eq!(
        paths.user_prompts_file(),
        PathBuf::from("/tmp/pls/prompts.yml")
    );
}
