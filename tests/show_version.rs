use chrono::DateTime;
use rstest::rstest;
use tempfile::TempDir;
use vulndb_version::config::db_path;
use vulndb_version::db::{DbError, DbType, Metadata, Store};
use vulndb_version::report::{OutputFormat, ReportError, show_version};

const TABLE_OUTPUT: &str = "\
+--------------------+-------------------------------+
|     COMPONENT      |            VERSION            |
+--------------------+-------------------------------+
| Trivy              | 1.2.3                         |
| VulnDB Type        | Light                         |
| VulnDB Version     |                            42 |
| VulnDB Updated At  | 2020-03-16 23:40:20 +0000 UTC |
| VulnDB Next Update | 2020-03-16 23:57:00 +0000 UTC |
+--------------------+-------------------------------+
";

const JSON_OUTPUT: &str = r#"{"Trivy":"1.2.3","VulnerabilityDB":{"Version":42,"Type":1,"NextUpdate":"2020-03-16T23:57:00Z","UpdatedAt":"2020-03-16T23:40:20Z"}}
"#;

fn seed_database(cache_dir: &std::path::Path) {
    let store = Store::open(cache_dir).unwrap();
    store
        .set_metadata(&Metadata {
            version: 42,
            db_type: DbType::LIGHT,
            next_update: DateTime::from_timestamp(1584403020, 0).unwrap(),
            updated_at: DateTime::from_timestamp(1584402020, 0).unwrap(),
        })
        .unwrap();
    store.close().unwrap();
}

#[rstest]
#[case::table(OutputFormat::Table, TABLE_OUTPUT)]
#[case::json(OutputFormat::Json, JSON_OUTPUT)]
fn show_version_renders_seeded_database(#[case] format: OutputFormat, #[case] expected: &str) {
    let temp_dir = TempDir::new().unwrap();
    seed_database(temp_dir.path());

    let mut out = Vec::new();
    show_version(temp_dir.path(), format, "1.2.3", &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[rstest]
#[case::table(OutputFormat::Table)]
#[case::json(OutputFormat::Json)]
fn show_version_without_database_fails_without_output(#[case] format: OutputFormat) {
    let temp_dir = TempDir::new().unwrap();

    let mut out = Vec::new();
    let err = show_version(temp_dir.path(), format, "1.2.3", &mut out).unwrap_err();

    assert!(matches!(err, ReportError::MetadataUnavailable(_)));
    assert_eq!(
        err.to_string(),
        "unable to display current version: unexpected end of JSON input"
    );
    assert!(out.is_empty());
}

#[test]
fn show_version_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    seed_database(temp_dir.path());

    let mut first = Vec::new();
    let mut second = Vec::new();
    show_version(temp_dir.path(), OutputFormat::Table, "1.2.3", &mut first).unwrap();
    show_version(temp_dir.path(), OutputFormat::Table, "1.2.3", &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn show_version_json_parses_back_to_stored_record() {
    let temp_dir = TempDir::new().unwrap();
    seed_database(temp_dir.path());

    let mut out = Vec::new();
    show_version(temp_dir.path(), OutputFormat::Json, "1.2.3", &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let metadata: Metadata = serde_json::from_value(value["VulnerabilityDB"].clone()).unwrap();
    let stored = Store::open(temp_dir.path()).unwrap().get_metadata().unwrap();

    assert_eq!(value["Trivy"], "1.2.3");
    assert_eq!(metadata, stored);
}

#[test]
fn show_version_with_unusable_cache_dir_reports_metadata_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let mut out = Vec::new();
    let err = show_version(&blocker, OutputFormat::Json, "1.2.3", &mut out).unwrap_err();

    assert!(matches!(err, ReportError::MetadataUnavailable(_)));
    assert!(
        err.to_string()
            .starts_with("unable to display current version: ")
    );
    assert!(out.is_empty());
}

#[rstest]
#[case::table(OutputFormat::Table)]
#[case::json(OutputFormat::Json)]
fn show_version_with_corrupt_record_fails_without_output(#[case] format: OutputFormat) {
    let temp_dir = TempDir::new().unwrap();
    Store::open(temp_dir.path()).unwrap().close().unwrap();
    let conn = rusqlite::Connection::open(db_path(temp_dir.path())).unwrap();
    conn.execute(
        "INSERT INTO kv (bucket, key, value) VALUES ('trivy', 'metadata', ?1)",
        [b"{\"Version\":".as_slice()],
    )
    .unwrap();
    conn.close().unwrap();

    let mut out = Vec::new();
    let err = show_version(temp_dir.path(), format, "1.2.3", &mut out).unwrap_err();

    assert!(matches!(
        err,
        ReportError::MetadataUnavailable(DbError::Json(_))
    ));
    assert!(
        err.to_string()
            .starts_with("unable to display current version: Invalid metadata: ")
    );
    assert!(out.is_empty());
}
