//! Engine configuration, read from TOML.
//!
//! ```toml
//! timezone = "America/Toronto"
//! time_step_minutes = 30
//! buildings = ["One Three North", "Two Three North"]
//!
//! [window]
//! start = "08:00"
//! end = "23:00"
//! ```
//!
//! Every key is optional.

use serde::Deserialize;

use crate::error::{Result, SlotError};
use crate::window::DayWindow;
use crate::zone::{CalendarZone, Floating, Zoned};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Bookable window; also defines what counts as "all day".
    #[serde(default)]
    pub window: DayWindow,

    /// IANA zone for offset-qualified timestamps. Absent means floating.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Granularity of the time picker.
    #[serde(default = "default_time_step")]
    pub time_step_minutes: u32,

    #[serde(default = "default_buildings")]
    pub buildings: Vec<String>,
}

fn default_time_step() -> u32 {
    30
}

fn default_buildings() -> Vec<String> {
    vec!["One Three North".to_string(), "Two Three North".to_string()]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: DayWindow::default(),
            timezone: None,
            time_step_minutes: default_time_step(),
            buildings: default_buildings(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidConfig` on syntax errors or invalid values,
    /// `SlotError::InvalidTimezone` for an unknown zone name.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(contents).map_err(|e| SlotError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.window.is_valid() {
            return Err(SlotError::InvalidConfig(format!(
                "window start must be before window end ({})",
                self.window
            )));
        }
        if self.time_step_minutes == 0 || self.time_step_minutes > 720 {
            return Err(SlotError::InvalidConfig(format!(
                "time_step_minutes must be between 1 and 720, got {}",
                self.time_step_minutes
            )));
        }
        if self.buildings.iter().any(|b| b.trim().is_empty()) {
            return Err(SlotError::InvalidConfig("building names must not be empty".to_string()));
        }
        if let Some(name) = &self.timezone {
            Zoned::from_name(name)?;
        }
        Ok(())
    }

    /// The calendar zone selected by `timezone`.
    pub fn zone(&self) -> Result<Box<dyn CalendarZone>> {
        match &self.timezone {
            Some(name) => Ok(Box::new(Zoned::from_name(name)?)),
            None => Ok(Box::new(Floating)),
        }
    }

    pub fn is_known_building(&self, building: &str) -> bool {
        self.buildings.iter().any(|b| b == building)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.window, DayWindow::STANDARD);
    }

    #[test]
    fn legacy_window_selectable() {
        let config = EngineConfig::from_toml_str(
            "timezone = \"America/Toronto\"\n[window]\nstart = \"00:00\"\nend = \"23:59\"\n",
        )
        .unwrap();
        assert_eq!(config.window, DayWindow::LEGACY);
        assert!(config.zone().is_ok());
    }

    #[test]
    fn inverted_window_rejected() {
        let err = EngineConfig::from_toml_str("[window]\nstart = \"23:00\"\nend = \"08:00\"\n").unwrap_err();
        assert!(matches!(err, SlotError::InvalidConfig(_)));
    }

    #[test]
    fn zero_step_rejected() {
        let err = EngineConfig::from_toml_str("time_step_minutes = 0").unwrap_err();
        assert!(matches!(err, SlotError::InvalidConfig(_)));
    }

    #[test]
    fn unknown_timezone_rejected() {
        let err = EngineConfig::from_toml_str("timezone = \"Nowhere/Land\"").unwrap_err();
        assert!(matches!(err, SlotError::InvalidTimezone(_)));
    }
}
