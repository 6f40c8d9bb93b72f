//! End-to-end decoration over a fixture dataset.
//!
//! Run with: cargo test -p poke-theme --test decorate_pipeline

mod common;

use std::sync::Arc;

use common::dataset_dir;
use poke_theme::{AssetRoots, Decorator, Platform, PluginConfig, ThemeDataset, decorate_config};
use serde_json::{Value, json};

fn decorator() -> (tempfile::TempDir, Decorator) {
    let dir = dataset_dir();
    let config = PluginConfig::default()
        .data_dir(dir.path())
        .backgrounds_dir("/poke/backgrounds")
        .gifs_dir("/poke/pokecursors")
        .platform(Platform::Unix);
    let decorator = Decorator::new(config).expect("Failed to load fixture dataset");
    (dir, decorator)
}

fn css(out: &Value) -> &str {
    out["css"].as_str().expect("css should be a string")
}

#[test]
fn test_fixed_token_is_idempotent() {
    let (_dir, decorator) = decorator();
    let host = json!({ "pokemon": "Charmander", "poketab": "true", "css": "a{}" });
    let first = decorator.decorate(&host).unwrap();
    let second = decorator.decorate(&host).unwrap();
    assert_eq!(first, second);
    assert_eq!(css(&first), css(&second));
}

#[test]
fn test_palette_derivations_end_to_end() {
    let (_dir, decorator) = decorator();

    let unibody = decorator.decorate(&json!({ "pokemon": "haunter" })).unwrap();
    assert_eq!(unibody["borderColor"], "#333333");
    assert!(css(&unibody).contains("background-color: #333333 !important;"));
    assert!(css(&unibody).contains("background-color: #383A42;"));

    let chrome = decorator
        .decorate(&json!({ "pokemon": "haunter", "unibody": "false" }))
        .unwrap();
    assert_eq!(chrome["borderColor"], "#111111");
    assert_eq!(chrome["selectionColor"], "rgba(17, 17, 17, 0.3)");
    assert_eq!(chrome["backgroundColor"], "rgba(238, 238, 238, 0)");
}

#[test]
fn test_dark_secondary_gets_light_tab() {
    let (_dir, decorator) = decorator();
    // pikachu's secondary is a dark brown
    let out = decorator.decorate(&json!({ "pokemon": "nobody" })).unwrap();
    assert!(css(&out).contains("pikachu.png"));
    assert!(css(&out).contains("background-color: #FAFAFA;"));
    assert!(css(&out).contains("background-color: hsl(0, 0%, 88.2%);"));
}

#[test]
fn test_poketab_controls_icon() {
    let (_dir, decorator) = decorator();

    let off = decorator.decorate(&json!({ "pokemon": "haunter" })).unwrap();
    assert!(!css(&off).contains("pokecursors"));

    let on = decorator
        .decorate(&json!({ "pokemon": "haunter", "poketab": "true" }))
        .unwrap();
    assert!(css(&on).contains(r#"content: url("file:///poke/pokecursors/haunter.gif");"#));
}

#[test]
fn test_category_token_picks_from_category() {
    let (_dir, decorator) = decorator();
    for _ in 0..20 {
        let out = decorator.decorate(&json!({ "pokemon": "trainers" })).unwrap();
        assert!(css(&out).contains("/poke/backgrounds/misty.png"));
    }
}

#[test]
fn test_token_list_resolves_to_a_member() {
    let (_dir, decorator) = decorator();
    for _ in 0..20 {
        let out = decorator
            .decorate(&json!({ "pokemon": ["haunter", "charmander"] }))
            .unwrap();
        let text = css(&out);
        assert!(text.contains("haunter.png") || text.contains("charmander.png"));
    }
}

#[test]
fn test_windows_paths_in_css() {
    let dir = dataset_dir();
    let dataset = ThemeDataset::load(dir.path()).unwrap();
    let roots = AssetRoots::new(r"C:\poke\backgrounds", r"C:\poke\pokecursors");
    let out = decorate_config(
        &json!({ "pokemon": "charmander", "poketab": "true" }),
        &dataset,
        &roots,
        Platform::Windows,
        &mut rand::thread_rng(),
    )
    .unwrap();
    assert!(css(&out).contains(r#"url("file://C:/poke/backgrounds/charmander.png")"#));
    assert!(css(&out).contains(r#"url("file://C:/poke/pokecursors/charmander.gif")"#));
    assert!(!css(&out).contains('\\'));
}

#[test]
fn test_shared_dataset_across_decorators() {
    let dir = dataset_dir();
    let dataset = Arc::new(ThemeDataset::load(dir.path()).unwrap());
    let unix = Decorator::with_dataset(
        Arc::clone(&dataset),
        PluginConfig::default().platform(Platform::Unix),
    );
    let windows = Decorator::with_dataset(
        Arc::clone(&dataset),
        PluginConfig::default().platform(Platform::Windows),
    );
    assert_eq!(unix.dataset(), windows.dataset());
    assert_eq!(Arc::strong_count(&dataset), 3);
}
