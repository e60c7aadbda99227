use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use spendlens_report::ChartOptions;

/// Presentation defaults, overridable via `~/.spendlens/config.toml`.
/// The built-in defaults reproduce the stock behavior: 1% label cutoff,
/// unlimited table rows, chart written to `spending.svg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chart: ChartSection,
    pub table: TableSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSection {
    /// Default output path for the exported pie chart
    pub output: String,
    pub width: f64,
    pub height: f64,
    /// Slices at or below this share (percent) get no in-slice label
    pub label_min_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSection {
    /// Maximum rows printed by `spendlens report` (0 = no limit)
    pub max_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart: ChartSection {
                output: "spending.svg".to_string(),
                width: 640.0,
                height: 420.0,
                label_min_pct: 1.0,
            },
            table: TableSection { max_rows: 0 },
        }
    }
}

impl Config {
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.chart.width,
            height: self.chart.height,
            label_min_pct: self.chart.label_min_pct,
        }
    }
}

pub fn spendlens_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".spendlens"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(spendlens_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}
