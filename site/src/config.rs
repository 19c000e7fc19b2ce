use anyhow::{Context, Result};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: String,
    pub port: u16,
    /// Directory holding the pages, `layouts/` and the built `pkg/`.
    pub root: PathBuf,
}

impl SiteConfig {
    /// Reads `KOPI_ADDR`, `KOPI_PORT` and `KOPI_ROOT`, after loading `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = get("KOPI_ADDR").unwrap_or_else(|| "127.0.0.1".to_owned());
        let port = match get("KOPI_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("KOPI_PORT must be a port number, got {raw:?}"))?,
            None => 3000,
        };
        let root = get("KOPI_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_root);

        Ok(Self { addr, port, root })
    }

    pub fn default_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../www") // = site/../www
    }
}
