//! Analytics configuration
//!
//! Thresholds, palette, rule switches, category taxonomy and list icons.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/outlay/config/analytics.toml)
//!    or an explicit path
//! 2. Fall back to embedded defaults (compiled into binary)

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::insights::RuleKind;
use crate::slices::DEFAULT_PALETTE;
use crate::taxonomy::{CategoryGroup, CategoryTaxonomy};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/analytics.toml");

/// Numeric knobs for the insight rules
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub pace_daily_limit: f64,
    pub skew_ratio: f64,
    pub dominant_share_pct: f64,
    pub trend_min_day: u32,
    pub trend_growth_ratio: f64,
    pub trend_min_projected: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pace_daily_limit: 50.0,
            skew_ratio: 1.5,
            dominant_share_pct: 30.0,
            trend_min_day: 10,
            trend_growth_ratio: 1.3,
            trend_min_projected: 100.0,
        }
    }
}

/// Full analytics configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Currency code shown in insight text
    pub currency: String,
    pub palette: Vec<String>,
    pub thresholds: Thresholds,
    /// Rules switched off by config
    pub disabled_rules: Vec<RuleKind>,
    pub taxonomy: CategoryTaxonomy,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            thresholds: Thresholds::default(),
            disabled_rules: Vec::new(),
            taxonomy: CategoryTaxonomy::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Load from the default override location, falling back to embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from an explicit path (embedded defaults if the file does not exist)
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// The embedded defaults
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }

    pub fn is_enabled(&self, rule: RuleKind) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    pub fn set_enabled(&mut self, rule: RuleKind, enabled: bool) {
        self.disabled_rules.retain(|r| *r != rule);
        if !enabled {
            self.disabled_rules.push(rule);
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("outlay").join("config").join("analytics.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<AnalyticsConfig> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };

    let content = match path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "Loading analytics config");
            fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
        }
        _ => {
            debug!("Using embedded analytics config");
            DEFAULT_CONFIG.to_string()
        }
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    rules: Option<HashMap<String, bool>>,
    thresholds: Option<RawThresholds>,
    taxonomy: Option<HashMap<String, String>>,
    icons: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency: Option<String>,
    palette: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawThresholds {
    pace_daily_limit: Option<f64>,
    skew_ratio: Option<f64>,
    dominant_share_pct: Option<f64>,
    trend_min_day: Option<u32>,
    trend_growth_ratio: Option<f64>,
    trend_min_projected: Option<f64>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<AnalyticsConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AnalyticsConfig::default();

    if let Some(display) = raw.display {
        if let Some(currency) = display.currency {
            config.currency = currency;
        }
        if let Some(palette) = display.palette {
            // An empty palette would leave slices without colors
            if !palette.is_empty() {
                config.palette = palette;
            }
        }
    }

    if let Some(rules) = raw.rules {
        for (name, enabled) in rules {
            let Ok(rule) = name.parse::<RuleKind>() else {
                debug!(rule = name.as_str(), "Skipping unknown rule in config");
                continue;
            };
            config.set_enabled(rule, enabled);
        }
        // HashMap iteration order is arbitrary
        config.disabled_rules.sort_by_key(|r| r.order());
    }

    if let Some(t) = raw.thresholds {
        let th = &mut config.thresholds;
        if let Some(v) = t.pace_daily_limit {
            th.pace_daily_limit = v;
        }
        if let Some(v) = t.skew_ratio {
            th.skew_ratio = v;
        }
        if let Some(v) = t.dominant_share_pct {
            th.dominant_share_pct = v;
        }
        if let Some(v) = t.trend_min_day {
            th.trend_min_day = v;
        }
        if let Some(v) = t.trend_growth_ratio {
            th.trend_growth_ratio = v;
        }
        if let Some(v) = t.trend_min_projected {
            th.trend_min_projected = v;
        }
    }

    if let Some(taxonomy) = raw.taxonomy {
        for (category, group) in taxonomy {
            let group: CategoryGroup = group.parse().map_err(Error::Config)?;
            config.taxonomy.insert(&category, group);
        }
    }

    if let Some(icons) = raw.icons {
        for (category, icon) in icons {
            config.taxonomy.set_icon(&category, &icon);
        }
    }

    Ok(config)
}
