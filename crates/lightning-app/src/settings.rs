use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lightning_config::Config;

pub const CONFIG_FILE: &str = "lightning.json";

const ROOT_VAR: &str = "LIGHTNING_ROOT";
const MAX_WORDS_VAR: &str = "LIGHTNING_MAX_WORDS";
const SAMPLE_SIZE_VAR: &str = "LIGHTNING_SAMPLE_SIZE";
const SEED_VAR: &str = "LIGHTNING_SEED";

/// `--root`, then `LIGHTNING_ROOT`, then the working directory
pub fn resolve_root(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(root) = flag {
        return Ok(root);
    }
    if let Some(root) = std::env::var_os(ROOT_VAR) {
        return Ok(PathBuf::from(root));
    }
    std::env::current_dir().context("Failed to get current directory")
}

/// Load `<root>/lightning.json` if present, then apply environment overrides
pub fn load_config(root: &Path) -> anyhow::Result<Config> {
    let path = root.join(CONFIG_FILE);

    let mut config: Config = if path.exists() {
        tracing::info!("Loading config from {}", path.display());
        let file =
            File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config file {}", path.display()))?
    } else {
        tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
        Config::default()
    };

    config.root = root.to_path_buf();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("{key}={value:?} is not a valid number"))
}

fn apply_env_overrides(
    config: &mut Config,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(value) = var(MAX_WORDS_VAR) {
        config.dictionary.max_words = parse_var(MAX_WORDS_VAR, &value)?;
    }
    if let Some(value) = var(SAMPLE_SIZE_VAR) {
        config.enrichment.sample_size = Some(parse_var(SAMPLE_SIZE_VAR, &value)?);
    }
    if let Some(value) = var(SEED_VAR) {
        config.enrichment.seed = Some(parse_var(SEED_VAR, &value)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();

        assert_eq!(config.root(), dir.path());
        assert_eq!(config.dictionary.max_words, 10_000);
    }

    #[test]
    fn config_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "dictionary": { "max_words": 250 }, "tracker": { "docs_dir": "notes" } }"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();

        assert_eq!(config.dictionary.max_words, 250);
        assert_eq!(config.dictionary.sheet_name, "1 lemmas");
        assert_eq!(
            config.tracker.log_path(config.root()),
            dir.path().join("notes/implementation_log.json")
        );
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = Config::default();

        apply_env_overrides(
            &mut config,
            vars(&[
                (MAX_WORDS_VAR, "500"),
                (SAMPLE_SIZE_VAR, " 20 "),
                (SEED_VAR, "7"),
            ]),
        )
        .unwrap();

        assert_eq!(config.dictionary.max_words, 500);
        assert_eq!(config.enrichment.sample_size, Some(20));
        assert_eq!(config.enrichment.seed, Some(7));
    }

    #[test]
    fn bad_env_value_is_reported() {
        let mut config = Config::default();

        let err = apply_env_overrides(&mut config, vars(&[(MAX_WORDS_VAR, "lots")])).unwrap_err();

        assert!(err.to_string().contains("LIGHTNING_MAX_WORDS"));
    }

    #[test]
    fn root_flag_wins() {
        let root = resolve_root(Some(PathBuf::from("/srv/lightning"))).unwrap();
        assert_eq!(root, PathBuf::from("/srv/lightning"));
    }
}
