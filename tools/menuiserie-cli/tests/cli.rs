//! Integration tests for the menuiserie CLI
//!
//! Each test runs the binary in an empty temp directory so no config file
//! from the developer's tree is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a menuiserie command in a fresh directory
fn menuiserie(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("menuiserie").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Catalogue
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quote"));
}

#[test]
fn test_products_lists_catalogue() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("fenetre-1"))
        .stdout(predicate::str::contains("volet-2"));
}

#[test]
fn test_products_by_category_json() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args(["--json", "products", "--category", "porte"]));
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["porte-1", "porte-2"]);
}

#[test]
fn test_products_search_and_featured() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args(["--json", "products", "--search", "VOLET"]));
    assert_eq!(json.as_array().unwrap().len(), 2);

    let json = json_stdout(menuiserie(&tmp).args(["--json", "products", "--featured"]));
    assert_eq!(json.as_array().unwrap().len(), 3);

    let json = json_stdout(menuiserie(&tmp).args(["--json", "products", "--featured", "1"]));
    assert_eq!(json[0]["id"], "fenetre-1");
}

#[test]
fn test_products_unknown_category_fails() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["products", "--category", "garage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown product type: garage"));
}

#[test]
fn test_product_details() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["product", "porte-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Porte d'Entrée Sécurité+"))
        .stdout(predicate::str::contains("Aluminium"));
}

#[test]
fn test_product_not_found() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["product", "fenetre-9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Product not found: fenetre-9"));
}

#[test]
fn test_options_for_door() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args(["--json", "options", "door"]));
    let add_ons: Vec<&str> = json["add_ons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(add_ons, ["serrure-securite", "judas"]);
    assert_eq!(json["colors"].as_array().unwrap().len(), 4);
}

// ============================================================================
// Quotes
// ============================================================================

#[test]
fn test_flat_quote() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args([
        "--json",
        "quote",
        "--type",
        "window",
        "--material",
        "aluminium",
        "--color",
        "gris",
        "--tier",
        "standard",
        "--add-on",
        "double-vitrage",
    ]));
    assert_eq!(json["breakdown"]["mode"], "flat-tier");
    assert_eq!(json["breakdown"]["total"]["amount_cents"], 50000);
}

#[test]
fn test_flat_quote_text_uses_french_format() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["quote", "--type", "door", "--material", "bois"])
        .assert()
        .success()
        .stdout(predicate::str::contains("450,00"));
}

#[test]
fn test_scaled_quote_for_product() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args([
        "--json",
        "quote",
        "--product",
        "fenetre-1",
        "--width",
        "200",
        "--height",
        "150",
    ]));
    assert_eq!(json["breakdown"]["mode"], "dimension-scaled");
    assert_eq!(json["breakdown"]["total"]["amount_cents"], 74997);
}

#[test]
fn test_quote_clamps_dimensions() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args([
        "--json", "quote", "--product", "volet-2", "--width", "400", "--height", "10",
    ]));
    assert_eq!(json["selection"]["dimension"]["width_cm"], 300);
    assert_eq!(json["selection"]["dimension"]["height_cm"], 50);
}

#[test]
fn test_quote_rejects_foreign_add_on() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["quote", "--type", "window", "--add-on", "judas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid add-on 'judas' for window"));
}

#[test]
fn test_scaled_quote_requires_product() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["quote", "--type", "shutter", "--mode", "scaled"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bound to a product"));
}

#[test]
fn test_quote_with_cart_item() {
    let tmp = TempDir::new().unwrap();
    let json = json_stdout(menuiserie(&tmp).args([
        "--json",
        "quote",
        "--product",
        "volet-1",
        "--add-on",
        "motorisation",
        "--quantity",
        "2",
    ]));
    assert_eq!(json["cart_item"]["product_id"], "volet-1");
    assert_eq!(json["cart_item"]["quantity"], 2);
    assert_eq!(json["cart_item"]["customizations"]["options"][0], "motorisation");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_init_then_show() {
    let tmp = TempDir::new().unwrap();
    menuiserie(&tmp)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(tmp.path().join("menuiserie.toml").exists());

    menuiserie(&tmp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("menuiserie.toml"));

    // a second init needs --force
    menuiserie(&tmp)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    menuiserie(&tmp)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_overrides_flat_base() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("menuiserie.toml"),
        "[pricing]\nflat_base_price_cents = 25000\n\n[display]\nlocale = \"en\"\n",
    )
    .unwrap();

    menuiserie(&tmp)
        .args(["quote", "--type", "window"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{20ac}250.00"));
}

#[test]
fn test_explicit_config_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("atelier.json");
    fs::write(&path, r#"{"pricing": {"mode": "dimension-scaled"}}"#).unwrap();

    let json = json_stdout(menuiserie(&tmp).args([
        "--json",
        "--config",
        path.to_str().unwrap(),
        "quote",
        "--product",
        "porte-2",
    ]));
    assert_eq!(json["breakdown"]["mode"], "dimension-scaled");
}

#[test]
fn test_invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("menuiserie.toml"),
        "[pricing]\nreference_width_cm = 0\n",
    )
    .unwrap();

    menuiserie(&tmp)
        .arg("products")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference_width_cm"));
}
