use lastchange_core::{OverrideKey, OverrideTable, RevisionInfo};

#[test]
fn test_load_table_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pins.json");
    std::fs::write(
        &path,
        r#"{
            "overrides": [
                {
                    "key": {"output_path": "out/LASTCHANGE"},
                    "revision_id": "1111",
                    "revision": "1111-refs/heads/main@{#5}"
                },
                {
                    "key": {"version_macro": "ANGLE_COMMIT_HASH"},
                    "revision_id": "2222",
                    "revision": "2222-"
                }
            ]
        }"#,
    )
    .unwrap();

    let table = OverrideTable::load(&path).unwrap();
    assert_eq!(table.overrides.len(), 2);
    assert_eq!(
        table.overrides[1].key,
        OverrideKey::VersionMacro("ANGLE_COMMIT_HASH".to_string())
    );
    let pin = table.lookup(Some("out/LASTCHANGE"), None).unwrap();
    assert_eq!(
        pin.to_revision_info(),
        RevisionInfo::new("1111", "1111-refs/heads/main@{#5}")
    );
    // A loaded table replaces the built-in pins.
    assert!(table.lookup(None, Some("SKIA_COMMIT_HASH")).is_none());
}

#[test]
fn test_missing_file_errors_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = OverrideTable::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn test_unknown_key_kind_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pins.json");
    std::fs::write(
        &path,
        r#"{"overrides": [{"key": {"branch": "main"}, "revision_id": "1", "revision": "1-"}]}"#,
    )
    .unwrap();
    let err = OverrideTable::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parsing override table"));
}
