//! The JSON-backed data service used by the driver binary.

use boatwatch::gateway::{BoatDataService, FixtureError, FixtureGateway, GatewayError};
use boatwatch::model::{BoatField, BoatTypeFilter, DraftEdit, DraftValue};
use boatwatch::ui::nearby_map::parse_nearby_boats;
use tempfile::TempDir;

const DATA: &str = r#"{
  "boats": [
    {"id": "b1", "name": "Windward", "boatTypeId": "sail", "length": 30, "price": 100000,
     "latitude": 37.80, "longitude": -122.40},
    {"id": "b2", "name": "Albatross", "boatTypeId": "sail", "length": 33, "price": 110000,
     "latitude": 37.90, "longitude": -122.50},
    {"id": "b3", "name": "Diesel Duck", "boatTypeId": "motor", "length": 60, "price": 900000},
    {"id": "b4", "name": "Harbor Hopper", "boatTypeId": "motor", "length": 20, "price": 40000,
     "latitude": 37.81, "longitude": -122.41}
  ],
  "reviews": [
    {"id": "r1", "boatId": "b1", "title": "Older", "createdDate": "2024-01-01T00:00:00Z"},
    {"id": "r2", "boatId": "b1", "title": "Newer", "createdDate": "2024-06-01T00:00:00Z"},
    {"id": "r3", "boatId": "b2", "title": "Other boat"}
  ]
}"#;

fn load() -> (TempDir, FixtureGateway) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("boats.json");
    std::fs::write(&path, DATA).expect("Failed to write fixture");
    let gateway = FixtureGateway::load(&path).expect("fixture should load");
    (dir, gateway)
}

#[test]
fn test_missing_fixture_is_read_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = FixtureGateway::load(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(FixtureError::Read { .. })));
}

#[test]
fn test_malformed_fixture_is_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("boats.json");
    std::fs::write(&path, "{ boats: ").expect("Failed to write fixture");
    let result = FixtureGateway::load(&path);
    assert!(matches!(result, Err(FixtureError::Parse { .. })));
}

#[tokio::test]
async fn test_type_filter() {
    let (_dir, gateway) = load();

    let all = gateway.fetch_boats(&BoatTypeFilter::all()).await.unwrap();
    assert_eq!(all.len(), 4);

    let sail = gateway
        .fetch_boats(&BoatTypeFilter::of_type("sail"))
        .await
        .unwrap();
    let names: Vec<&str> = sail.iter().map(|boat| boat.name.as_str()).collect();
    assert_eq!(names, vec!["Albatross", "Windward"]);
}

#[tokio::test]
async fn test_location_query_orders_by_distance() {
    let (_dir, gateway) = load();

    let payload = gateway
        .fetch_boats_by_location(37.80, -122.40, &BoatTypeFilter::all())
        .await
        .unwrap();
    let boats = parse_nearby_boats(&payload).unwrap();
    let ids: Vec<&str> = boats.iter().map(|boat| boat.id.as_str()).collect();

    // The boat without a position sorts last.
    assert_eq!(ids, vec!["b1", "b4", "b2", "b3"]);
}

#[tokio::test]
async fn test_save_applies_edits() {
    let (_dir, gateway) = load();

    gateway
        .save_boats(vec![
            DraftEdit::new("b3", BoatField::Name, DraftValue::Text("Tug".to_string())),
            DraftEdit::new("b3", BoatField::Price, DraftValue::Number(850000.0)),
        ])
        .await
        .unwrap();

    let data = gateway.snapshot();
    let boat = data.boats.iter().find(|boat| boat.id.as_str() == "b3").unwrap();
    assert_eq!(boat.name, "Tug");
    assert_eq!(boat.price, Some(850000.0));
}

#[tokio::test]
async fn test_invalid_save_writes_nothing() {
    let (_dir, gateway) = load();
    let before = gateway.snapshot();

    let result = gateway
        .save_boats(vec![
            DraftEdit::new("b1", BoatField::Name, DraftValue::Text("Renamed".to_string())),
            DraftEdit::new("b1", BoatField::Length, DraftValue::Text("long".to_string())),
        ])
        .await;

    assert!(matches!(result, Err(GatewayError::Rejected { .. })));
    assert_eq!(gateway.snapshot(), before);
}
