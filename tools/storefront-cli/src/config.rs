//! Config file loading and saving.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use storefront_cart::config::StorefrontConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Load config from a file; `.json` files are JSON, anything else TOML.
pub fn load(path: &Path) -> Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(&content, is_json(path))
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse config text.
pub fn parse(content: &str, json: bool) -> Result<StorefrontConfig> {
    if json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(toml::from_str(content)?)
    }
}

/// Find the nearest config file in `start` or its parents.
pub fn find(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map(|ext| ext == "json").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storefront_cart::config::generate_default_config;

    #[test]
    fn test_default_template_parses() {
        let config = parse(&generate_default_config("Aryamadam"), false).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_parse_toml_overrides() {
        let config = parse(
            "[checkout]\nwhatsapp_number = \"15551234567\"\n[logging]\njson = true\n",
            false,
        )
        .unwrap();
        assert_eq!(config.checkout.whatsapp_number, "15551234567");
        assert!(config.logging.json);
        assert_eq!(config.store.name, "Aryamadam");
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("storefront.json")));
        assert!(!is_json(Path::new("storefront.toml")));
    }
}
