use std::fs;
use stockpile::config::StockConfig;
use stockpile::model::{Group, Item};
use stockpile::repository::StockRepository;
use stockpile::error::StockError;
use tempfile::TempDir;

fn open(dir: &TempDir) -> StockRepository<stockpile::store::fs::FileBackend> {
    StockRepository::open(dir.path(), &StockConfig::default())
}

#[test]
fn records_survive_reopening() {
    let dir = TempDir::new().unwrap();
    let group = Group::new("Peripherals");
    let mouse = Item::new("Mouse", 5, Some(group.id));
    let stapler = Item::new("Stapler, heavy duty", 1, None);

    let mut repo = open(&dir);
    assert!(repo.add_group(group.clone()).is_success());
    assert!(repo.add_item(mouse.clone()).is_success());
    assert!(repo.add_item(stapler.clone()).is_success());
    drop(repo);

    let repo = open(&dir);
    assert_eq!(repo.list_items().unwrap(), vec![mouse.clone(), stapler]);
    assert_eq!(repo.get_group(group.id).unwrap(), Some(group));
    assert_eq!(repo.get_item_view(mouse.id).unwrap().unwrap().group, "Peripherals");
}

#[test]
fn empty_tables_keep_their_header() {
    let dir = TempDir::new().unwrap();
    let item = Item::new("Mouse", 5, None);

    let mut repo = open(&dir);
    repo.add_item(item.clone()).into_result().unwrap();
    repo.remove_item(item.id).into_result().unwrap();

    let text = fs::read_to_string(dir.path().join("items.csv")).unwrap();
    assert_eq!(text, "Id,Name,Quantity,GroupId\n");
}

#[test]
fn missing_item_is_reported_and_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut repo = open(&dir);
    repo.add_item(Item::new("Mouse", 5, None)).into_result().unwrap();
    let before = fs::read_to_string(dir.path().join("items.csv")).unwrap();

    let outcome = repo.remove_item(uuid::Uuid::new_v4());
    assert_eq!(outcome.code(), 1);
    assert!(matches!(outcome.into_result(), Err(StockError::ItemNotFound(_))));
    assert_eq!(fs::read_to_string(dir.path().join("items.csv")).unwrap(), before);
}

#[test]
fn deleted_group_shows_placeholder() {
    let dir = TempDir::new().unwrap();
    let group = Group::new("Tools");
    let item = Item::new("Hammer", 1, Some(group.id));

    let mut repo = open(&dir);
    repo.add_group(group.clone()).into_result().unwrap();
    repo.add_item(item.clone()).into_result().unwrap();
    repo.remove_group(group.id).into_result().unwrap();

    let view = repo.get_item_view(item.id).unwrap().unwrap();
    assert_eq!(view.group, "None");
}

#[test]
fn negative_quantities_on_disk_load_unchanged() {
    let dir = TempDir::new().unwrap();
    let id = uuid::Uuid::new_v4();
    fs::write(
        dir.path().join("items.csv"),
        format!("Id,Name,Quantity,GroupId\n{},Mouse,-3,\n", id),
    )
    .unwrap();

    let repo = open(&dir);
    let item = repo.get_item(id).unwrap().unwrap();
    assert_eq!(item.quantity, -3);
    assert_eq!(item.group_id, None);
}

#[test]
fn no_temp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let mut repo = open(&dir);
    for n in 1..=3 {
        repo.add_item(Item::new(format!("Item {}", n), n, None))
            .into_result()
            .unwrap();
    }

    let stray: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(stray.is_empty());
}
