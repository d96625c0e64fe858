use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"id": "1", "name": "Running Shoes", "description": "Lightweight trainers", "category": "Sports",
   "price": 75.0, "originalPrice": 100.0, "rating": 4.6, "reviewCount": 210, "inStock": true, "featured": true},
  {"id": "2", "name": "Hat", "description": "Wool beanie", "category": "Clothing",
   "price": 19.0, "rating": 4.1, "reviewCount": 12, "inStock": false},
  {"id": "3", "name": "Trail Shoe Laces", "description": "Spare laces", "category": "Sports",
   "price": 4.5, "rating": 3.9, "reviewCount": 3, "inStock": true}
]"#;

fn workspace() -> (TempDir, String) {
    let tmp = TempDir::new().expect("tmpdir");
    let path = tmp.path().join("catalog.json");
    fs::write(&path, CATALOG).expect("write catalog");
    let catalog = path.to_str().expect("utf8 path").to_string();
    (tmp, catalog)
}

fn shop(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shop"));
    cmd.current_dir(dir).env_remove("SHOP_CATALOG").env_remove("SHOP_LOG");
    cmd
}

#[test]
fn browse_filters_by_search_text() {
    let (tmp, catalog) = workspace();
    shop(tmp.path())
        .args(["--catalog", &catalog, "browse", "--search", "SHOE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running Shoes"))
        .stdout(predicate::str::contains("25% OFF"))
        .stdout(predicate::str::contains("Trail Shoe Laces"))
        .stdout(predicate::str::contains("Hat").not());
}

#[test]
fn browse_json_respects_category() {
    let (tmp, catalog) = workspace();
    let assert = shop(tmp.path())
        .args(["--catalog", &catalog, "--json", "browse", "--category", "Clothing"])
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let json: serde_json::Value = serde_json::from_str(&output).expect("json");
    let data = json["data"].as_array().expect("array");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "2");
    assert_eq!(data[0]["inStock"], false);
}

#[test]
fn catalog_path_can_come_from_env() {
    let (tmp, catalog) = workspace();
    shop(tmp.path())
        .env("SHOP_CATALOG", &catalog)
        .arg("categories")
        .assert()
        .success()
        .stdout("all\nSports\nClothing\n");
}

#[test]
fn browse_without_catalog_fails() {
    let tmp = TempDir::new().expect("tmpdir");
    shop(tmp.path())
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no catalog given"));
}

#[test]
fn replay_applies_script_and_reports_orders() {
    let (tmp, catalog) = workspace();
    let script = tmp.path().join("script.json");
    fs::write(
        &script,
        r#"[
          {"session": {"login_succeeded": {"id": "user1", "email": "user@example.com", "name": "Demo User"}}},
          {"cart": {"add": {"id": "1", "name": "Running Shoes", "description": "Lightweight trainers",
                            "category": "Sports", "price": 75.0, "rating": 4.6, "reviewCount": 210, "inStock": true}}},
          {"cart": {"update_quantity": {"id": "1", "quantity": 2}}},
          {"place_order": {"address": {"name": "Demo User", "street": "1 Main St", "city": "Springfield",
                                       "state": "IL", "zipCode": "62701", "country": "United States"},
                           "paymentMethod": "cash_on_delivery", "placedAtMs": 42}},
          {"orders": {"advance": {"id": "ORD-42", "atMs": 43}}}
        ]"#,
    )
    .expect("write script");

    let assert = shop(tmp.path())
        .args(["--catalog", &catalog, "--json", "replay"])
        .arg(&script)
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let json: serde_json::Value = serde_json::from_str(&output).expect("json");
    let data = &json["data"];
    assert_eq!(data["cart"]["itemCount"], 0);
    assert_eq!(data["orders"]["counts"]["shipped"], 1);
    assert_eq!(data["orders"]["orders"][0]["id"], "ORD-42");
    assert_eq!(data["orders"]["orders"][0]["subtotal"], 150.0);
    assert_eq!(data["catalog"]["totalProducts"], 3);
}

#[test]
fn replay_stops_on_failed_action_unless_keep_going() {
    let (tmp, catalog) = workspace();
    let script = tmp.path().join("script.json");
    fs::write(
        &script,
        r#"[
          {"orders": {"cancel": {"id": "ORD-404", "atMs": 1}}},
          {"catalog": {"set_search_query": "hat"}}
        ]"#,
    )
    .expect("write script");

    shop(tmp.path())
        .args(["--catalog", &catalog, "replay"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown order 'ORD-404'"));

    shop(tmp.path())
        .args(["--catalog", &catalog, "replay", "--keep-going"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog: 1 of 3 products visible"))
        .stderr(predicate::str::contains("action #0 (orders) failed"));
}

#[test]
fn dotenv_supplies_catalog_without_overriding() {
    let (tmp, catalog) = workspace();
    fs::write(tmp.path().join(".env"), format!("SHOP_CATALOG={catalog}\n")).expect("env");
    shop(tmp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("all\n"));
}
