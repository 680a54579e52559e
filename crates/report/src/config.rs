//! Report configuration from command-line arguments and environment.

use std::path::PathBuf;

use anyhow::{Context, bail};

use biblio_catalog::LoadOptions;

pub const CATALOG_PATH_ENV: &str = "BIBLIO_CATALOG_PATH";
pub const DELIMITER_ENV: &str = "BIBLIO_CSV_DELIMITER";
pub const HAS_HEADERS_ENV: &str = "BIBLIO_CSV_HAS_HEADERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub catalog_path: PathBuf,
    pub load: LoadOptions,
}

impl ReportConfig {
    /// Read configuration from the process arguments and environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let first_arg = std::env::args().nth(1);
        Self::resolve(first_arg, |key| std::env::var(key).ok())
    }

    /// The first argument wins over `BIBLIO_CATALOG_PATH` for the source path.
    pub fn resolve(
        first_arg: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let catalog_path = first_arg
            .or_else(|| env(CATALOG_PATH_ENV))
            .filter(|p| !p.trim().is_empty())
            .with_context(|| format!("no catalog path given (argument or {CATALOG_PATH_ENV})"))?;

        let mut load = LoadOptions::default();
        if let Some(raw) = env(DELIMITER_ENV) {
            load.delimiter = parse_delimiter(&raw)?;
        }
        if let Some(raw) = env(HAS_HEADERS_ENV) {
            load.has_headers = parse_flag(&raw)
                .with_context(|| format!("invalid {HAS_HEADERS_ENV} value {raw:?}"))?;
        }

        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            load,
        })
    }
}

fn parse_delimiter(raw: &str) -> anyhow::Result<u8> {
    let value = if raw == "\\t" { "\t" } else { raw };
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => bail!("{DELIMITER_ENV} must be a single ASCII character, got {raw:?}"),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn argument_overrides_env_path() {
        let config = ReportConfig::resolve(
            Some("from-arg.csv".into()),
            env_of(&[(CATALOG_PATH_ENV, "from-env.csv")]),
        )
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("from-arg.csv"));
        assert_eq!(config.load, LoadOptions::default());
    }

    #[test]
    fn env_supplies_path_and_options() {
        let config = ReportConfig::resolve(
            None,
            env_of(&[
                (CATALOG_PATH_ENV, "catalog.csv"),
                (DELIMITER_ENV, ";"),
                (HAS_HEADERS_ENV, "yes"),
            ]),
        )
        .unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("catalog.csv"));
        assert_eq!(config.load.delimiter, b';');
        assert!(config.load.has_headers);
    }

    #[test]
    fn tab_delimiter_can_be_escaped() {
        let config = ReportConfig::resolve(
            Some("c.tsv".into()),
            env_of(&[(DELIMITER_ENV, "\\t")]),
        )
        .unwrap();
        assert_eq!(config.load.delimiter, b'\t');
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(ReportConfig::resolve(None, env_of(&[])).is_err());
        assert!(ReportConfig::resolve(Some("  ".into()), env_of(&[])).is_err());
    }

    #[test]
    fn bad_options_are_rejected() {
        let multi = env_of(&[(DELIMITER_ENV, "::")]);
        assert!(ReportConfig::resolve(Some("c.csv".into()), multi).is_err());

        let flag = env_of(&[(HAS_HEADERS_ENV, "maybe")]);
        assert!(ReportConfig::resolve(Some("c.csv".into()), flag).is_err());
    }
}
