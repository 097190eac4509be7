use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use outwit_core::{Cents, NotifyPolicy, PayoffStrategy};

pub fn outwit_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".outwit"))
}

pub fn ensure_outwit_home() -> Result<PathBuf> {
    let dir = outwit_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub payoff: PayoffSection,
    #[serde(default)]
    pub alerts: AlertsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffSection {
    /// Strategy used when `--strategy` is not passed.
    pub default_strategy: PayoffStrategy,
    /// Extra cents thrown at the plan each month by default.
    pub default_extra: Cents,
}

impl Default for PayoffSection {
    fn default() -> Self {
        Self {
            default_strategy: PayoffStrategy::Avalanche,
            default_extra: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsSection {
    pub bill_lead_days: u64,
    pub include_autopay: bool,
}

impl Default for AlertsSection {
    fn default() -> Self {
        Self {
            bill_lead_days: 3,
            include_autopay: false,
        }
    }
}

impl AlertsSection {
    pub fn policy(&self) -> NotifyPolicy {
        NotifyPolicy {
            bill_lead_days: self.bill_lead_days,
            include_autopay: self.include_autopay,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_outwit_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
