//! Common test utilities: on-disk dataset fixtures.

use std::path::Path;

use tempfile::TempDir;

pub const TYPES: &str = "
fire:
  charmander:
    primary: '#F08030'
    secondary: '#FFF1C1'
    tertiary: '#8A3A12'
    unibody: '#D0652A'
";

pub const POKEMON: &str = "
pokemon:
  pikachu:
    primary: '#F6E652'
    secondary: '#3C2E12'
    tertiary: '#C0392B'
    unibody: '#E8D33F'
  charmander:
    primary: '#F08030'
    secondary: '#FFF1C1'
    tertiary: '#8A3A12'
    unibody: '#D0652A'
  haunter:
    primary: '#111111'
    secondary: '#eeeeee'
    tertiary: '#222222'
    unibody: '#333333'
";

pub const TRAINERS: &str = "
trainers:
  misty:
    primary: '#F29B38'
    secondary: '#1E3A5F'
    tertiary: '#3E8FD0'
    unibody: '#E08A2A'
";

/// Write the three data files into a fresh temp dir.
pub fn dataset_dir() -> TempDir {
    dataset_dir_with(&[
        ("types.yml", TYPES),
        ("pokemon.yml", POKEMON),
        ("trainers.yml", TRAINERS),
    ])
}

/// Write only the given files.
pub fn dataset_dir_with(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, text) in files {
        write(dir.path(), name, text);
    }
    dir
}

fn write(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).expect("Failed to write fixture");
}
