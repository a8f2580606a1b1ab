//! Navigation menu configuration system
//!
//! This crate provides centralized configuration for the navigation menu,
//! loading timing, gesture and layout constants from `navmenu.toml` with
//! environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "navmenu.toml";

/// Main configuration structure for the navigation menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NavConfig {
    /// Menu graph source
    pub menu: MenuSourceConfig,
    /// Desktop hover-intent settings
    pub hover: HoverConfig,
    /// Mobile sheet gesture and animation settings
    pub sheet: SheetConfig,
    /// Sheet height estimation constants
    pub height: HeightConfig,
    /// Viewport and page layout settings
    pub layout: LayoutConfig,
}

/// Where the driver loads the menu graph from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSourceConfig {
    /// Path to the menu graph JSON file
    pub path: PathBuf,
}

/// Desktop hover-intent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Grace window before a flyout closes after the pointer leaves (ms)
    pub close_delay_ms: f32,
}

/// Mobile bottom-sheet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Drag distance past which releasing the sheet closes it (px)
    pub commit_distance_px: f32,
    /// Release velocity past which the sheet closes (px/s)
    pub commit_velocity_px_s: f32,
    /// Spring stiffness for open/close/snap-back
    pub spring_stiffness: f32,
    /// Spring damping for open/close/snap-back
    pub spring_damping: f32,
    /// Spring mass for open/close/snap-back
    pub spring_mass: f32,
    /// Rubber-band factor for downward drags (0 = rigid, higher = looser)
    pub drag_elastic: f32,
    /// Duration of the sheet height tween when the view changes (ms)
    pub height_duration_ms: f32,
    /// Backdrop opacity when the sheet rests fully open
    pub backdrop_max_opacity: f32,
    /// Close the sheet after an item has been routed
    pub close_on_select: bool,
}

/// Constants used to estimate the sheet's content height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightConfig {
    /// Fixed cost of the sheet header (drag handle + title row)
    pub header_px: f32,
    /// Height of one channel row on the main view
    pub main_row_px: f32,
    /// Section label shown above the channel rows on the main view
    pub main_group_label_px: f32,
    /// Height of a list's group label on a submenu view
    pub submenu_group_label_px: f32,
    /// Height of a plain item row on a submenu view
    pub submenu_item_px: f32,
    /// Height of an image card item
    pub image_card_px: f32,
    /// Height of an illustrated flyout panel item
    pub flyout_panel_px: f32,
    /// Bottom padding (safe area + breathing room)
    pub padding_px: f32,
    /// Item columns on narrow layouts
    pub columns: u32,
    /// Main view clamp, as fractions of the viewport height
    pub main_min_fraction: f32,
    pub main_max_fraction: f32,
    /// Submenu view clamp, as fractions of the viewport height
    pub submenu_min_fraction: f32,
    pub submenu_max_fraction: f32,
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports at least this wide use the hover flyout presentation
    pub wide_breakpoint_px: f32,
    /// Fixed header height that anchor scrolls must clear
    pub header_offset_px: f32,
}

impl Default for MenuSourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("demos/menu.json"),
        }
    }
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 150.0,
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            commit_distance_px: 50.0,
            commit_velocity_px_s: 500.0,
            spring_stiffness: 400.0,
            spring_damping: 40.0,
            spring_mass: 1.0,
            drag_elastic: 0.5,
            height_duration_ms: 250.0,
            backdrop_max_opacity: 0.5,
            close_on_select: true,
        }
    }
}

impl Default for HeightConfig {
    fn default() -> Self {
        Self {
            header_px: 72.0,
            main_row_px: 56.0,
            main_group_label_px: 32.0,
            submenu_group_label_px: 36.0,
            submenu_item_px: 64.0,
            image_card_px: 180.0,
            flyout_panel_px: 220.0,
            padding_px: 24.0,
            columns: 1,
            main_min_fraction: 0.35,
            main_max_fraction: 0.85,
            submenu_min_fraction: 0.40,
            submenu_max_fraction: 0.85,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_breakpoint_px: 1024.0,
            header_offset_px: 80.0,
        }
    }
}

impl NavConfig {
    /// Load configuration from a TOML file
    ///
    /// # Returns
    /// * `Ok(NavConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from `navmenu.toml` in the current directory,
    /// or return the default configuration if the file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(path) = std::env::var("NAVMENU_MENU_PATH") {
            self.menu.path = PathBuf::from(path);
        }
        if let Some(ms) = env_f32("NAVMENU_CLOSE_DELAY_MS") {
            self.hover.close_delay_ms = ms;
        }
        if let Some(px) = env_f32("NAVMENU_COMMIT_DISTANCE_PX") {
            self.sheet.commit_distance_px = px;
        }
        if let Some(v) = env_f32("NAVMENU_COMMIT_VELOCITY_PX_S") {
            self.sheet.commit_velocity_px_s = v;
        }
        if let Ok(val) = std::env::var("NAVMENU_CLOSE_ON_SELECT") {
            self.sheet.close_on_select = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Some(px) = env_f32("NAVMENU_WIDE_BREAKPOINT_PX") {
            self.layout.wide_breakpoint_px = px;
        }
        if let Some(px) = env_f32("NAVMENU_HEADER_OFFSET_PX") {
            self.layout.header_offset_px = px;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from navmenu.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Reject settings the controllers cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.hover.close_delay_ms < 0.0 {
            return Err("hover.close_delay_ms must not be negative".to_string());
        }
        let sheet = &self.sheet;
        if sheet.spring_stiffness <= 0.0 || sheet.spring_mass <= 0.0 || sheet.spring_damping < 0.0
        {
            return Err("sheet spring parameters must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&sheet.drag_elastic) {
            return Err(format!(
                "sheet.drag_elastic must be within [0, 1], got {}",
                sheet.drag_elastic
            ));
        }
        if sheet.commit_distance_px < 0.0 || sheet.commit_velocity_px_s < 0.0 {
            return Err("sheet commit thresholds must not be negative".to_string());
        }
        let height = &self.height;
        if height.columns == 0 {
            return Err("height.columns must be at least 1".to_string());
        }
        check_fraction_range("main", height.main_min_fraction, height.main_max_fraction)?;
        check_fraction_range(
            "submenu",
            height.submenu_min_fraction,
            height.submenu_max_fraction,
        )?;
        Ok(())
    }
}

fn env_f32(key: &str) -> Option<f32> {
    std::env::var(key).ok()?.parse::<f32>().ok()
}

fn check_fraction_range(view: &str, min: f32, max: f32) -> Result<(), String> {
    if min <= 0.0 || max > 1.0 || min > max {
        return Err(format!(
            "height.{view} clamp must satisfy 0 < min <= max <= 1, got [{min}, {max}]"
        ));
    }
    Ok(())
}
