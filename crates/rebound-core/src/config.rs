use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::overscroll::spring::{
    DAMPING_RATIO_HIGH_BOUNCY, DAMPING_RATIO_LOW_BOUNCY, DAMPING_RATIO_MEDIUM_BOUNCY,
    DAMPING_RATIO_NO_BOUNCY, STIFFNESS_HIGH, STIFFNESS_LOW, STIFFNESS_MEDIUM, STIFFNESS_VERY_LOW,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub overscroll: OverscrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Tuning for the bounce effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverscrollConfig {
    /// Scales fling (absorb) velocity into the spring's start velocity
    #[serde(default = "default_fling_translation")]
    pub fling_translation: f32,
    /// Scales per-frame drag delta into a translation delta
    #[serde(default = "default_overscroll_translation")]
    pub overscroll_translation: f32,
    /// Spring damping: "high_bouncy", "medium_bouncy", "low_bouncy", "no_bouncy" or a number
    #[serde(default = "default_damping_ratio")]
    pub damping_ratio: DampingSetting,
    /// Spring stiffness: "high", "medium", "low", "very_low" or a number
    #[serde(default = "default_stiffness")]
    pub stiffness: StiffnessSetting,
    /// Smallest translation change the surface can show, in surface units
    #[serde(default = "default_min_visible_change")]
    pub min_visible_change: f32,
}

impl Default for OverscrollConfig {
    fn default() -> Self {
        Self {
            fling_translation: default_fling_translation(),
            overscroll_translation: default_overscroll_translation(),
            damping_ratio: default_damping_ratio(),
            stiffness: default_stiffness(),
            min_visible_change: default_min_visible_change(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a spring is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Number of rows in the demo list
    #[serde(default = "default_item_count")]
    pub item_count: usize,
    /// Multiplier from measured scroll speed (rows/s) to fling velocity
    #[serde(default = "default_fling_velocity_scale")]
    pub fling_velocity_scale: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            item_count: default_item_count(),
            fling_velocity_scale: default_fling_velocity_scale(),
        }
    }
}

/// Spring damping ratio, either a named preset or an explicit value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DampingSetting {
    HighBouncy,
    MediumBouncy,
    LowBouncy,
    NoBouncy,
    Custom(f32),
}

impl DampingSetting {
    pub fn ratio(&self) -> f32 {
        match self {
            DampingSetting::HighBouncy => DAMPING_RATIO_HIGH_BOUNCY,
            DampingSetting::MediumBouncy => DAMPING_RATIO_MEDIUM_BOUNCY,
            DampingSetting::LowBouncy => DAMPING_RATIO_LOW_BOUNCY,
            DampingSetting::NoBouncy => DAMPING_RATIO_NO_BOUNCY,
            DampingSetting::Custom(ratio) => *ratio,
        }
    }

    fn name(&self) -> Option<&'static str> {
        match self {
            DampingSetting::HighBouncy => Some("high_bouncy"),
            DampingSetting::MediumBouncy => Some("medium_bouncy"),
            DampingSetting::LowBouncy => Some("low_bouncy"),
            DampingSetting::NoBouncy => Some("no_bouncy"),
            DampingSetting::Custom(_) => None,
        }
    }
}

/// Spring stiffness, either a named preset or an explicit value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StiffnessSetting {
    High,
    Medium,
    Low,
    VeryLow,
    Custom(f32),
}

impl StiffnessSetting {
    pub fn value(&self) -> f32 {
        match self {
            StiffnessSetting::High => STIFFNESS_HIGH,
            StiffnessSetting::Medium => STIFFNESS_MEDIUM,
            StiffnessSetting::Low => STIFFNESS_LOW,
            StiffnessSetting::VeryLow => STIFFNESS_VERY_LOW,
            StiffnessSetting::Custom(value) => *value,
        }
    }

    fn name(&self) -> Option<&'static str> {
        match self {
            StiffnessSetting::High => Some("high"),
            StiffnessSetting::Medium => Some("medium"),
            StiffnessSetting::Low => Some("low"),
            StiffnessSetting::VeryLow => Some("very_low"),
            StiffnessSetting::Custom(_) => None,
        }
    }
}

/// Settings that can be written as a preset name or a bare number
trait NamedSetting: Sized {
    const EXPECTING: &'static str;

    fn from_name(name: &str) -> Option<Self>;
    fn custom(value: f32) -> Self;
}

impl NamedSetting for DampingSetting {
    const EXPECTING: &'static str =
        "a damping preset (high_bouncy, medium_bouncy, low_bouncy, no_bouncy) or a number";

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "high_bouncy" => Some(DampingSetting::HighBouncy),
            "medium_bouncy" => Some(DampingSetting::MediumBouncy),
            "low_bouncy" => Some(DampingSetting::LowBouncy),
            "no_bouncy" => Some(DampingSetting::NoBouncy),
            _ => None,
        }
    }

    fn custom(value: f32) -> Self {
        DampingSetting::Custom(value)
    }
}

impl NamedSetting for StiffnessSetting {
    const EXPECTING: &'static str =
        "a stiffness preset (high, medium, low, very_low) or a number";

    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "high" => Some(StiffnessSetting::High),
            "medium" => Some(StiffnessSetting::Medium),
            "low" => Some(StiffnessSetting::Low),
            "very_low" => Some(StiffnessSetting::VeryLow),
            _ => None,
        }
    }

    fn custom(value: f32) -> Self {
        StiffnessSetting::Custom(value)
    }
}

struct SettingVisitor<T>(PhantomData<T>);

impl<'de, T: NamedSetting> serde::de::Visitor<'de> for SettingVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(T::EXPECTING)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        T::from_name(value).ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }

    fn visit_f64<E>(self, value: f64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        Ok(T::custom(value as f32))
    }

    fn visit_i64<E>(self, value: i64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        Ok(T::custom(value as f32))
    }

    fn visit_u64<E>(self, value: u64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        Ok(T::custom(value as f32))
    }
}

impl<'de> Deserialize<'de> for DampingSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(SettingVisitor::<Self>(PhantomData))
    }
}

impl<'de> Deserialize<'de> for StiffnessSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(SettingVisitor::<Self>(PhantomData))
    }
}

impl Serialize for DampingSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_f32(self.ratio()),
        }
    }
}

impl Serialize for StiffnessSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_f32(self.value()),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rebound")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_fling_translation() -> f32 {
    0.5
}

fn default_overscroll_translation() -> f32 {
    0.1
}

fn default_damping_ratio() -> DampingSetting {
    DampingSetting::MediumBouncy
}

fn default_stiffness() -> StiffnessSetting {
    StiffnessSetting::Low
}

fn default_min_visible_change() -> f32 {
    1.0 // one pixel, or one terminal cell
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_item_count() -> usize {
    60
}

fn default_fling_velocity_scale() -> f32 {
    8.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reject tunings the spring cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        let overscroll = &self.overscroll;

        for (name, value) in [
            ("fling_translation", overscroll.fling_translation),
            ("overscroll_translation", overscroll.overscroll_translation),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(crate::Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("damping_ratio", overscroll.damping_ratio.ratio()),
            ("stiffness", overscroll.stiffness.value()),
            ("min_visible_change", overscroll.min_visible_change),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(crate::Error::Config(format!(
                    "{} must be greater than zero, got {}",
                    name, value
                )));
            }
        }

        if self.ui.item_count == 0 {
            return Err(crate::Error::Config(
                "item_count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/rebound/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rebound")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("rebound.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
