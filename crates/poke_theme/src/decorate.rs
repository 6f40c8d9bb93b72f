//! Top-level orchestration: host config in, decorated host config out.

use std::sync::Arc;

use rand::Rng;
use serde_json::{Map, Value};

use crate::assets::{AssetRoots, Platform, locate_assets};
use crate::config::PluginConfig;
use crate::dataset::ThemeDataset;
use crate::error::Result;
use crate::options::resolve_options;
use crate::selector::resolve_theme;
use crate::style::synthesize;

/// Decorate `config` with the theme it asks for.
///
/// Returns a copy of `config` with the color scheme merged in, the stylesheet
/// appended to `css`, and `termCSS` passed through. Other fields are left
/// untouched. A non-object `config` is treated as an empty object.
pub fn decorate_config<R: Rng + ?Sized>(
    config: &Value,
    dataset: &ThemeDataset,
    roots: &AssetRoots,
    platform: Platform,
    rng: &mut R,
) -> Result<Value> {
    let _span = tracing::debug_span!("decorate_config").entered();

    let options = resolve_options(config, rng);
    let theme = resolve_theme(&options.pokemon, dataset, rng);
    let assets = locate_assets(&theme.name, roots, platform);
    let style = synthesize(&options, &theme, &assets);

    tracing::info!(
        token = %options.pokemon,
        theme = %theme.name,
        poketab = options.poketab,
        unibody = options.unibody,
        "pokemon theme applied"
    );

    let mut out = match config {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    if let Value::Object(colors) = serde_json::to_value(&style.colors)? {
        out.extend(colors);
    }

    let term_css = match config.get("termCSS") {
        Some(value) if !is_falsy(value) => value.clone(),
        _ => Value::String(String::new()),
    };
    out.insert("termCSS".to_string(), term_css);

    let host_css = config.get("css").and_then(Value::as_str).unwrap_or_default();
    out.insert(
        "css".to_string(),
        Value::String(format!("{host_css}{}", style.css)),
    );

    Ok(Value::Object(out))
}

/// `null`, `false`, `0` and `""` count as unset.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Decorate with the bundled dataset and default configuration.
pub fn decorate(config: &Value) -> Result<Value> {
    let plugin = PluginConfig::default();
    decorate_config(
        config,
        ThemeDataset::bundled()?,
        &plugin.roots,
        plugin.platform,
        &mut rand::thread_rng(),
    )
}

/// A loaded dataset plus the configuration to decorate with.
///
/// Load once at startup and reuse for every decoration call.
#[derive(Clone, Debug)]
pub struct Decorator {
    dataset: Arc<ThemeDataset>,
    config: PluginConfig,
}

impl Decorator {
    /// Load the dataset named by `config` (or the bundled one).
    pub fn new(config: PluginConfig) -> Result<Self> {
        let dataset = match &config.data_dir {
            Some(dir) => ThemeDataset::load(dir)?,
            None => ThemeDataset::bundled()?.clone(),
        };
        tracing::debug!(data_dir = ?config.data_dir, "decorator ready");
        Ok(Self::with_dataset(Arc::new(dataset), config))
    }

    /// Use an already loaded dataset.
    pub fn with_dataset(dataset: Arc<ThemeDataset>, config: PluginConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &ThemeDataset {
        &self.dataset
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn decorate(&self, config: &Value) -> Result<Value> {
        self.decorate_with_rng(config, &mut rand::thread_rng())
    }

    pub fn decorate_with_rng<R: Rng + ?Sized>(
        &self,
        config: &Value,
        rng: &mut R,
    ) -> Result<Value> {
        decorate_config(
            config,
            &self.dataset,
            &self.config.roots,
            self.config.platform,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    fn decorator() -> Decorator {
        let config = PluginConfig::default()
            .backgrounds_dir("/poke/backgrounds")
            .gifs_dir("/poke/pokecursors")
            .platform(Platform::Unix);
        Decorator::new(config).unwrap()
    }

    #[test]
    fn test_passthrough_and_append() {
        let host = json!({
            "fontSize": 13,
            "css": ".host { color: red; }",
            "termCSS": "x-screen { }",
            "pokemon": "gengar",
        });
        let out = decorator()
            .decorate_with_rng(&host, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(out["fontSize"], 13);
        assert_eq!(out["termCSS"], "x-screen { }");
        assert_eq!(out["pokemon"], "gengar");
        let css = out["css"].as_str().unwrap();
        assert!(css.starts_with(".host { color: red; }\n.terms_terms {"));
        assert!(css.contains("/poke/backgrounds/gengar.png"));
    }

    #[test]
    fn test_missing_css_fields_default_to_empty() {
        let out = decorator()
            .decorate_with_rng(&json!({}), &mut StdRng::seed_from_u64(2))
            .unwrap();
        assert_eq!(out["termCSS"], "");
        assert!(out["css"].as_str().unwrap().starts_with("\n.terms_terms {"));
        assert!(out["css"].as_str().unwrap().contains("pikachu.png"));
    }

    #[test]
    fn test_falsy_term_css_becomes_empty() {
        for term_css in [json!(false), json!(0), json!(""), json!(null)] {
            let host = json!({ "termCSS": term_css });
            let out = decorator()
                .decorate_with_rng(&host, &mut StdRng::seed_from_u64(5))
                .unwrap();
            assert_eq!(out["termCSS"], "", "{term_css}");
        }
        let out = decorator()
            .decorate_with_rng(&json!({ "termCSS": true }), &mut StdRng::seed_from_u64(6))
            .unwrap();
        assert_eq!(out["termCSS"], true);
    }

    #[test]
    fn test_non_object_config() {
        let out = decorator()
            .decorate_with_rng(&json!("nonsense"), &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert!(out.is_object());
        assert!(out["backgroundColor"].is_string());
    }

    #[test]
    fn test_color_scheme_is_merged() {
        let out = decorator()
            .decorate_with_rng(
                &json!({ "pokemon": "lapras", "unibody": "false" }),
                &mut StdRng::seed_from_u64(4),
            )
            .unwrap();
        assert_eq!(out["borderColor"], "#4C8FBF");
        assert_eq!(out["foregroundColor"], "#F1E8C8");
        assert_eq!(out["colors"]["black"], "#1F3F5C");
        assert_eq!(out["colors"].as_object().unwrap().len(), 16);
    }

    #[test]
    fn test_decorate_with_bundled_defaults() {
        let out = decorate(&json!({ "pokemon": "snorlax" })).unwrap();
        assert!(out["css"].as_str().unwrap().contains("snorlax.png"));
    }
}
