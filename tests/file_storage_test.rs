use habitz::init::initialize;
use habitz::storage::fs::FileStorage;
use habitz::storage::KeyValueStore;
use habitz::view;
use habitz::{FilterMode, HabitTracker};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStorage) {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("data"));
    (dir, storage)
}

#[test]
fn test_file_storage_basic_io() {
    let (_dir, storage) = setup();

    // 1. Missing key
    assert_eq!(storage.get("habits").unwrap(), None);

    // 2. Write creates the directory
    storage.set("habits", "[]").unwrap();
    assert_eq!(storage.get("habits").unwrap().as_deref(), Some("[]"));

    // 3. Overwrite
    storage.set("habits", "[1]").unwrap();
    assert_eq!(storage.get("habits").unwrap().as_deref(), Some("[1]"));

    // 4. Delete, twice
    storage.delete("habits").unwrap();
    storage.delete("habits").unwrap();
    assert_eq!(storage.get("habits").unwrap(), None);
}

#[test]
fn test_file_storage_atomic_write_artifacts() {
    let (_dir, storage) = setup();
    storage.set("habits", "{}").unwrap();

    let expected_path = storage.root().join("habits.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "{}");

    for entry in fs::read_dir(storage.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_file_storage_rejects_bad_keys() {
    let (_dir, storage) = setup();
    assert!(storage.set("../escape", "x").is_err());
    assert!(storage.get("").is_err());
}

#[test]
fn test_tracker_round_trip_on_disk() {
    let (dir, _) = setup();
    let data_dir = dir.path().join("habitz");

    let id = {
        let mut tracker = HabitTracker::open(FileStorage::new(&data_dir), "habits");
        let id = tracker.add("Drink Water", "health").unwrap().affected_habits[0].id;
        tracker.add("Sketch", "creative").unwrap();
        tracker.toggle(id).unwrap();
        id
    };

    let tracker = HabitTracker::open(FileStorage::new(&data_dir), "habits");
    assert_eq!(tracker.habits().len(), 2);
    assert!(tracker.habit(id).unwrap().completed);
    assert_eq!(tracker.stats().percentage, 50);
}

#[test]
fn test_corrupt_file_opens_empty() {
    let (dir, _) = setup();
    let data_dir = dir.path().join("habitz");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("habits.json"), "\u{0}\u{1}garbage").unwrap();

    let mut ctx = initialize(&data_dir);
    assert!(ctx.tracker.habits().is_empty());

    ctx.tracker.add("Start over", "health").unwrap();
    let reopened = initialize(&data_dir);
    assert_eq!(reopened.tracker.habits().len(), 1);
}

#[test]
fn test_view_projection_from_tracker() {
    let (dir, _) = setup();
    let mut ctx = initialize(dir.path());
    let id = ctx.tracker.add("Meditate", "mindfulness").unwrap().affected_habits[0].id;
    ctx.tracker.add("Juggle", "circus").unwrap();
    ctx.tracker.toggle(id).unwrap();

    let result = ctx.tracker.set_filter(FilterMode::Completed).unwrap();
    let view = view::from_result(&result, ctx.tracker.filter(), chrono::Utc::now());

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "Meditate");
    assert_eq!(view.rows[0].category_label, Some("Mindfulness"));
    assert!(view.rows[0].status.starts_with("Completed"));
    assert_eq!(view.stats.total, 2);
    assert_eq!(view.empty_message, None);
}
