// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use lance_app::{AmountBucket, DaysBucket};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "lance";
const DEFAULT_GREETING_NAME: &str = "Ella";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub filters: Filters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            filters: Filters::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub greeting_name: Option<String>,
    pub show_filters: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            greeting_name: Some(DEFAULT_GREETING_NAME.to_owned()),
            show_filters: Some(false),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Filters {
    pub amount: Option<String>,
    pub days: Option<String>,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            amount: Some("all".to_owned()),
            days: Some("all".to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("LANCE_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set LANCE_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [ui] and [filters]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(name) = &self.ui.greeting_name
            && name.trim().is_empty()
        {
            bail!("ui.greeting_name in {} must not be blank", path.display());
        }

        Ok(())
    }

    pub fn greeting_name(&self) -> String {
        self.ui
            .greeting_name
            .clone()
            .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_owned())
    }

    pub fn show_filters(&self) -> bool {
        self.ui.show_filters.unwrap_or(false)
    }

    /// Filter strings are forgiving: anything unrecognized falls back to the
    /// match-everything bucket instead of failing startup.
    pub fn amount_filter(&self) -> AmountBucket {
        self.filters
            .amount
            .as_deref()
            .map_or(AmountBucket::All, AmountBucket::from_raw)
    }

    pub fn days_filter(&self) -> DaysBucket {
        self.filters
            .days
            .as_deref()
            .map_or(DaysBucket::All, DaysBucket::from_raw)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# lance config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\ngreeting_name = \"{}\"\nshow_filters = false\n\n[filters]\n# Buckets: all, 0-500, 500-1000, 1000-2500, 2500+\namount = \"all\"\n# Buckets: all, 1-7, 8-14, 15-30, 30+\ndays = \"all\"\n",
            path.display(),
            DEFAULT_GREETING_NAME,
        )
    }
}
