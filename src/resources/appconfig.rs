//! Application configuration resource.
//!
//! Settings loaded from an INI configuration file. Defaults are safe to start
//! with; a missing file or a bad value only costs the affected setting.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 192
//! target_fps = 60
//! vsync = true
//!
//! [lcd]
//! scale = 4
//!
//! [colors]
//! foreground = FFFFFF
//! background = 000000
//! ```
//!
//! Colors are written without the leading `#`, which INI readers take as a
//! comment marker.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::lcdgeometry::DEFAULT_SCALE;
use crate::resources::palette::{Palette, Rgb};

const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 192;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const MAX_SCALE: u32 = 32;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
///
/// The [`apply_config_to_scene`] and [`apply_config_to_window`] systems push
/// these values into the LCD geometry, the palette and the window whenever the
/// resource changes.
///
/// [`apply_config_to_scene`]: crate::systems::appconfig::apply_config_to_scene
/// [`apply_config_to_window`]: crate::systems::appconfig::apply_config_to_window
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second, which is also the tick rate.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Surface pixels per LCD pixel.
    pub scale: u32,
    /// Lit pixel color.
    pub foreground: Rgb,
    /// Unlit pixel color.
    pub background: Rgb,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        let palette = Palette::default();
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            scale: DEFAULT_SCALE,
            foreground: palette.foreground,
            background: palette.background,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Values that are present
    /// but invalid are skipped with a warning. Returns an error only if the
    /// file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, scale={}, colors {} on {}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.scale,
            self.foreground.to_hex(),
            self.background.to_hex()
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [lcd] section
        if let Some(scale) = config.getuint("lcd", "scale").ok().flatten() {
            if (1..=MAX_SCALE as u64).contains(&scale) {
                self.scale = scale as u32;
            } else {
                warn!("Ignoring lcd.scale = {}, expected 1..={}", scale, MAX_SCALE);
            }
        }

        // [colors] section
        if let Some(text) = config.get("colors", "foreground") {
            match Rgb::parse_hex(&text) {
                Ok(color) => self.foreground = color,
                Err(e) => warn!("Ignoring colors.foreground: {}", e),
            }
        }
        if let Some(text) = config.get("colors", "background") {
            match Rgb::parse_hex(&text) {
                Ok(color) => self.background = color,
                Err(e) => warn!("Ignoring colors.background: {}", e),
            }
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        // [lcd] section
        config.set("lcd", "scale", Some(self.scale.to_string()));

        // [colors] section
        let hex = |c: Rgb| c.to_hex().trim_start_matches('#').to_string();
        config.set("colors", "foreground", Some(hex(self.foreground)));
        config.set("colors", "background", Some(hex(self.background)));

        config
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Palette described by this configuration.
    pub fn palette(&self) -> Palette {
        Palette {
            foreground: self.foreground,
            background: self.background,
        }
    }
}
