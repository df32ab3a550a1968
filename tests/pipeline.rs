use std::fs;
use std::path::Path;

use actordb::{ingest, report, ActorStore, Error, ReportFormat};
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn actors_csv(range: std::ops::RangeInclusive<i64>) -> String {
    let mut csv = String::from("id,first_name,last_name,gender\n");
    for i in range {
        csv.push_str(&format!("{i},First{i},Last{i},F\n"));
    }
    csv
}

#[test]
fn test_full_pipeline_on_disk() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("actors.db");
    let csv = write_csv(
        dir.path(),
        "actors.csv",
        "id,first_name,last_name,gender\n1,Emma,Watson,F\n2,Jennifer,Lawrence,F",
    );

    let store = ActorStore::open(&db).unwrap();
    let stats = ingest::populate(&store, &csv).unwrap();
    assert_eq!(stats.rows, 2);

    let actors = store.query_actors(10).unwrap();
    let rendered = report::render(&actors, ReportFormat::Plain).unwrap();
    assert!(rendered.starts_with("ID | First Name | Last Name | Gender\n-----------------------------------\n"));
    assert!(rendered.contains("1 | Emma | Watson | F\n"));
    assert!(rendered.contains("2 | Jennifer | Lawrence | F\n"));
    store.close().unwrap();
}

#[test]
fn test_second_run_is_additive() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("actors.db");

    let first = write_csv(dir.path(), "first.csv", &actors_csv(1..=5));
    let store = ActorStore::open(&db).unwrap();
    ingest::populate(&store, &first).unwrap();
    store.close().unwrap();

    // Reopening runs the schema statement again on an existing table.
    let second = write_csv(
        dir.path(),
        "second.csv",
        "id,first_name,last_name,gender\n5,Meryl,Streep,F\n6,Tom,Hanks,M\n",
    );
    let store = ActorStore::open(&db).unwrap();
    ingest::populate(&store, &second).unwrap();

    assert_eq!(store.count_actors().unwrap(), 6);
    assert_eq!(store.get_actor(1).unwrap().unwrap().first_name, "First1");
    assert_eq!(store.get_actor(5).unwrap().unwrap().last_name, "Streep");
}

#[test]
fn test_report_is_capped_at_limit() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "many.csv", &actors_csv(1..=15));
    let store = ActorStore::open(&dir.path().join("actors.db")).unwrap();

    ingest::populate(&store, &csv).unwrap();
    assert_eq!(store.count_actors().unwrap(), 15);
    assert_eq!(store.query_actors(10).unwrap().len(), 10);
}

#[test]
fn test_header_only_file() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "empty.csv", "id,first_name,last_name,gender\n");
    let store = ActorStore::open_in_memory().unwrap();

    let stats = ingest::populate(&store, &csv).unwrap();
    assert_eq!(stats.rows, 0);

    let rendered = report::render(&store.query_actors(10).unwrap(), ReportFormat::Plain).unwrap();
    assert_eq!(rendered.lines().count(), 2);
}

#[test]
fn test_missing_csv_fails() {
    let dir = TempDir::new().unwrap();
    let store = ActorStore::open_in_memory().unwrap();

    let result = ingest::populate(&store, &dir.path().join("IMDB-actors.csv"));
    assert!(matches!(result, Err(Error::Io(_))));
}
