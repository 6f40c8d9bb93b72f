//! Loading the dataset from disk.
//!
//! Run with: cargo test -p poke-theme --test dataset_load

mod common;

use common::{POKEMON, TRAINERS, TYPES, dataset_dir, dataset_dir_with};
use poke_theme::{DataLoadError, Decorator, PluginConfig, PokeThemeError, ThemeDataset};

#[test]
fn test_load_merges_all_files() -> anyhow::Result<()> {
    let dir = dataset_dir();
    let dataset = ThemeDataset::load(dir.path())?;

    let names: Vec<&str> = dataset.categories().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["fire", "pokemon", "trainers"]);
    assert_eq!(dataset.pokemon().len(), 3);
    assert!(dataset.category("trainers").unwrap().contains_key("misty"));
    Ok(())
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = dataset_dir_with(&[("types.yml", TYPES), ("pokemon.yml", POKEMON)]);
    let err = ThemeDataset::load(dir.path()).unwrap_err();
    match err {
        DataLoadError::Read { path, .. } => assert!(path.ends_with("trainers.yml")),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let dir = dataset_dir_with(&[
        ("types.yml", "fire: [charmander"),
        ("pokemon.yml", POKEMON),
        ("trainers.yml", TRAINERS),
    ]);
    let err = ThemeDataset::load(dir.path()).unwrap_err();
    match err {
        DataLoadError::Parse { file, .. } => assert_eq!(file, "types.yml"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_pikachu_aborts_decorator() {
    let dir = dataset_dir_with(&[
        ("types.yml", TYPES),
        ("pokemon.yml", POKEMON.replace("pikachu", "raichu").as_str()),
        ("trainers.yml", TRAINERS),
    ]);
    let err = Decorator::new(PluginConfig::default().data_dir(dir.path())).unwrap_err();
    assert!(matches!(
        err,
        PokeThemeError::DataLoad(DataLoadError::MissingFallback)
    ));
}

#[test]
fn test_decorator_uses_data_dir() -> anyhow::Result<()> {
    let dir = dataset_dir();
    let decorator = Decorator::new(PluginConfig::default().data_dir(dir.path()))?;
    assert!(decorator.dataset().pokemon().contains_key("haunter"));
    assert!(!decorator.dataset().contains_category("water"));
    Ok(())
}
