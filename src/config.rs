//! Runtime configuration for the catalog binaries.
//!
//! Settings come from the environment first (`DATASTAR_VERIFY_DOCS`,
//! `DATASTAR_DOC_TIMEOUT_SECS`, `DATASTAR_CATALOG_OUT`); command-line flags
//! applied afterwards override them.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::time::Duration;

use crate::docs::DEFAULT_TIMEOUT;

pub const ENV_VERIFY_DOCS: &str = "DATASTAR_VERIFY_DOCS";
pub const ENV_DOC_TIMEOUT: &str = "DATASTAR_DOC_TIMEOUT_SECS";
pub const ENV_CATALOG_OUT: &str = "DATASTAR_CATALOG_OUT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Fetch every documentation URL while building.
    pub verify_docs: bool,
    pub doc_timeout: Duration,
    /// Export destination; stdout when unset.
    pub output: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            verify_docs: false,
            doc_timeout: DEFAULT_TIMEOUT,
            output: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source so callers and tests need not
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_VERIFY_DOCS) {
            config.verify_docs = is_truthy(&raw);
        }
        if let Some(raw) = lookup(ENV_DOC_TIMEOUT) {
            config.doc_timeout =
                parse_timeout(&raw).with_context(|| format!("invalid {ENV_DOC_TIMEOUT}"))?;
        }
        if let Some(raw) = lookup(ENV_CATALOG_OUT) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.output = Some(PathBuf::from(trimmed));
            }
        }
        Ok(config)
    }
}

/// Non-empty and not `0`.
pub fn is_truthy(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != "0"
}

/// Whole seconds, at least one.
pub fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("expected whole seconds, got '{raw}'"))?;
    if secs == 0 {
        bail!("timeout must be at least one second");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.doc_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_all_variables() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (ENV_VERIFY_DOCS, "1"),
            (ENV_DOC_TIMEOUT, " 3 "),
            (ENV_CATALOG_OUT, "out/catalog.json"),
        ]))
        .unwrap();
        assert!(config.verify_docs);
        assert_eq!(config.doc_timeout, Duration::from_secs(3));
        assert_eq!(config.output, Some(PathBuf::from("out/catalog.json")));

        let off = CatalogConfig::from_lookup(lookup(&[(ENV_VERIFY_DOCS, "0")])).unwrap();
        assert!(!off.verify_docs);
    }

    #[test]
    fn rejects_bad_timeouts() {
        let err = CatalogConfig::from_lookup(lookup(&[(ENV_DOC_TIMEOUT, "soon")])).unwrap_err();
        assert!(format!("{err:#}").contains("expected whole seconds"));
        assert!(parse_timeout("0").is_err());
    }
}
