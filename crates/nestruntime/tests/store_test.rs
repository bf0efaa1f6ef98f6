use nestcore::{DefinitionError, EmbeddedNodeCall, NestError, NodeDefinition};
use nestruntime::{DefinitionRegistry, DefinitionStore};
use serde_json::json;
use tempfile::tempdir;

fn sample_definition(name: &str) -> NodeDefinition {
    NodeDefinition {
        name: name.to_string(),
        display_name: Some("Double Blur".to_string()),
        inputs: json!({"required": {"image": ["IMAGE"]}}),
        output: json!(["IMAGE"]),
        nested_workflow: vec![
            EmbeddedNodeCall::new("Blur").with_param("amount", 2),
            EmbeddedNodeCall::new("Blur").with_param("amount", 2),
        ],
        extra: serde_json::Map::new(),
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());
    let registry = DefinitionRegistry::new(store.clone());

    let def = sample_definition("double_blur");
    store.save(&def).unwrap();

    let defs = registry.load_all().unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs["double_blur"], def);
}

#[test]
fn save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());

    let first = sample_definition("blur");
    store.save(&first).unwrap();

    let mut second = sample_definition("blur");
    second.output = json!(["MASK"]);
    store.save(&second).unwrap();

    let defs = DefinitionRegistry::new(store).load_all().unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs["blur"].output, json!(["MASK"]));
}

#[test]
fn malformed_file_never_blocks_the_rest() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());

    store.save(&sample_definition("good")).unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json at all").unwrap();

    let defs = DefinitionRegistry::new(store).load_all().unwrap();
    assert_eq!(defs.len(), 1);
    assert!(defs.contains_key("good"));
}

#[test]
fn definition_without_name_never_loads() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());

    std::fs::write(
        dir.path().join("anonymous.json"),
        json!({"inputs": {}, "output": ["IMAGE"]}).to_string(),
    )
    .unwrap();

    let defs = DefinitionRegistry::new(store).load_all().unwrap();
    assert!(defs.is_empty());
}

#[test]
fn non_json_files_are_ignored() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());

    store.save(&sample_definition("good")).unwrap();
    std::fs::write(dir.path().join("readme.txt"), "not a definition").unwrap();

    let defs = DefinitionRegistry::new(store).load_all().unwrap();
    assert_eq!(defs.len(), 1);
}

#[test]
fn duplicate_names_across_files_fail_the_load() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());

    // Hand-placed files whose `name` disagrees with the file name
    let doc = json!({"name": "dup", "output": ["IMAGE"]}).to_string();
    std::fs::write(dir.path().join("a.json"), &doc).unwrap();
    std::fs::write(dir.path().join("b.json"), &doc).unwrap();

    let err = DefinitionRegistry::new(store).load_all().unwrap_err();
    assert!(matches!(
        err,
        NestError::Definition(DefinitionError::DuplicateName(name)) if name == "dup"
    ));
}

#[test]
fn save_with_empty_name_fails() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());

    let mut def = sample_definition("x");
    def.name.clear();

    let err = store.save(&def).unwrap_err();
    assert!(matches!(
        err,
        NestError::Definition(DefinitionError::EmptyName)
    ));
}

#[test]
fn name_with_path_separators_never_leaves_the_directory() {
    let dir = tempdir().unwrap();
    let defs_dir = dir.path().join("defs");
    let store = DefinitionStore::new(&defs_dir);

    let mut def = sample_definition("ok");
    def.name = "../escaped".to_string();

    let err = store.save(&def).unwrap_err();
    assert!(matches!(
        err,
        NestError::Definition(DefinitionError::InvalidName(name)) if name == "../escaped"
    ));

    // Nothing written next to the store, nothing loadable from it
    assert!(!dir.path().join("escaped.json").exists());
    let defs = DefinitionRegistry::new(store).load_all().unwrap();
    assert!(defs.is_empty());
}

#[test]
fn list_creates_the_directory_on_first_run() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("not_yet_created");
    let store = DefinitionStore::new(&nested);

    let defs = store.list().unwrap();
    assert!(defs.is_empty());
    assert!(nested.is_dir());
}

#[test]
fn load_all_sees_changes_between_calls() {
    let dir = tempdir().unwrap();
    let store = DefinitionStore::new(dir.path());
    let registry = DefinitionRegistry::new(store.clone());

    assert!(registry.load_all().unwrap().is_empty());

    store.save(&sample_definition("late")).unwrap();
    assert!(registry.load_all().unwrap().contains_key("late"));
}
