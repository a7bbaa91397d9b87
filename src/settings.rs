//! Game settings and layout presets
//!
//! Read once at startup from the environment; nothing is written back.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;
use crate::error::{Error, Result};
use crate::sim::BrickGrid;

/// Environment variable holding a layout preset name
pub const LAYOUT_ENV: &str = "BRICK_BREAKER_LAYOUT";
/// Environment variable holding a full settings object as JSON
pub const SETTINGS_ENV: &str = "BRICK_BREAKER_SETTINGS";

/// Brick layout presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Layout {
    /// One row of two bricks, no pause key
    Classic,
    /// Four rows of ten bricks, Escape pauses
    #[default]
    Extended,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Classic => "Classic",
            Layout::Extended => "Extended",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Layout::Classic),
            "extended" | "ext" => Some(Layout::Extended),
            _ => None,
        }
    }

    /// Grid dimensions as (rows, columns)
    pub fn grid(&self) -> (usize, usize) {
        match self {
            Layout::Classic => (1, 2),
            Layout::Extended => (4, 10),
        }
    }

    /// Whether Escape toggles pause
    pub fn pause_enabled(&self) -> bool {
        match self {
            Layout::Classic => false,
            Layout::Extended => true,
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preset the grid fields were derived from
    pub layout: Layout,
    pub brick_rows: usize,
    pub brick_cols: usize,
    /// Escape toggles pause when set; otherwise it acts like any other key
    pub pause_enabled: bool,
    /// Timer period in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Layout::default())
    }
}

impl Settings {
    /// Create settings from a layout preset
    pub fn from_preset(layout: Layout) -> Self {
        let (brick_rows, brick_cols) = layout.grid();
        Self {
            layout,
            brick_rows,
            brick_cols,
            pause_enabled: layout.pause_enabled(),
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }

    /// Parse and validate a JSON settings object. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        BrickGrid::check_size(self.brick_rows, self.brick_cols)?;
        if self.tick_interval_ms == 0 {
            return Err(Error::ZeroTickInterval);
        }
        Ok(())
    }

    /// Load settings from the environment.
    ///
    /// `BRICK_BREAKER_SETTINGS` wins over `BRICK_BREAKER_LAYOUT`; with neither
    /// set the default preset is used.
    pub fn load() -> Result<Self> {
        Self::from_sources(
            std::env::var(SETTINGS_ENV).ok().as_deref(),
            std::env::var(LAYOUT_ENV).ok().as_deref(),
        )
    }

    fn from_sources(json: Option<&str>, layout: Option<&str>) -> Result<Self> {
        if let Some(json) = json {
            let settings = Self::from_json(json)?;
            log::info!("Loaded settings from {}", SETTINGS_ENV);
            return Ok(settings);
        }

        if let Some(name) = layout {
            let layout =
                Layout::from_str(name).ok_or_else(|| Error::UnknownLayout(name.to_string()))?;
            log::info!("Using {} layout", layout.as_str());
            return Ok(Self::from_preset(layout));
        }

        log::info!("Using default settings");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let classic = Settings::from_preset(Layout::Classic);
        assert_eq!((classic.brick_rows, classic.brick_cols), (1, 2));
        assert!(!classic.pause_enabled);

        let extended = Settings::default();
        assert_eq!(extended.layout, Layout::Extended);
        assert!(extended.pause_enabled);
        assert_eq!(extended.tick_interval_ms, TICK_INTERVAL_MS);
    }

    #[test]
    fn test_layout_names() {
        assert_eq!(Layout::from_str(" CLASSIC "), Some(Layout::Classic));
        assert_eq!(Layout::from_str("ext"), Some(Layout::Extended));
        assert_eq!(Layout::from_str("huge"), None);
        assert_eq!(Layout::from_str(Layout::Classic.as_str()), Some(Layout::Classic));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "brick_rows": 2 }"#).unwrap();
        assert_eq!(settings.brick_rows, 2);
        assert_eq!(settings.brick_cols, Settings::default().brick_cols);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let err = Settings::from_json(r#"{ "brick_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::EmptyGrid { cols: 0, .. }));
    }

    #[test]
    fn test_huge_grid_rejected() {
        let err = Settings::from_json(r#"{ "brick_rows": 4294967296, "brick_cols": 4294967296 }"#)
            .unwrap_err();
        assert!(matches!(err, Error::GridTooLarge { .. }));

        let err = Settings::from_json(r#"{ "brick_rows": 26 }"#).unwrap_err();
        assert!(matches!(err, Error::GridTooLarge { rows: 26, .. }));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = Settings::from_json(r#"{ "tick_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::ZeroTickInterval));
    }

    #[test]
    fn test_source_precedence() {
        let settings =
            Settings::from_sources(Some(r#"{ "brick_rows": 3 }"#), Some("classic")).unwrap();
        assert_eq!(settings.brick_rows, 3);

        let settings = Settings::from_sources(None, Some("classic")).unwrap();
        assert_eq!(settings.layout, Layout::Classic);

        assert!(matches!(
            Settings::from_sources(None, Some("nope")),
            Err(Error::UnknownLayout(_))
        ));
        assert_eq!(Settings::from_sources(None, None).unwrap(), Settings::default());
    }
}
