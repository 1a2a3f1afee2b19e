//! Cube configuration resource.
//!
//! Manages puzzle and host settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [cube]
//! size = 3
//! piece_size = 100.0
//!
//! [moves]
//! move_speed = 0.4
//! scramble_speed = 0.25
//! scramble_steps = 20
//!
//! [gesture]
//! drag_distance = 15.0
//! group_tolerance = 5.0
//!
//! [camera]
//! pitch_limit = 65.0
//! sensitivity = 0.3
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::events::moves::{DEFAULT_MOVE_SPEED, SCRAMBLE_MOVE_SPEED};
use crate::resources::camerarig::CAMERA_PITCH_LIMIT;
use crate::resources::cube::{Cube, DEFAULT_PIECE_SIZE, DEFAULT_SIZE};
use crate::systems::group::DEFAULT_GROUP_TOLERANCE;

/// Default safe values for startup
const DEFAULT_SCRAMBLE_STEPS: i32 = 20;
const DEFAULT_DRAG_DISTANCE: f32 = 15.0;
const DEFAULT_CAMERA_SENSITIVITY: f32 = 0.3;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Shortest accepted animation, in seconds.
const MIN_SPEED: f32 = 0.01;

/// Cube configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CubeConfig {
    /// Cubies per edge, clamped to the supported range.
    pub size: i32,
    /// Side width of one cubie in world units.
    pub piece_size: f32,
    /// Duration of an interactive turn in seconds.
    pub move_speed: f32,
    /// Duration of a scramble turn in seconds.
    pub scramble_speed: f32,
    /// Default scramble chain length.
    pub scramble_steps: i32,
    /// Drag length (world units) before a press turns into a move.
    pub drag_distance: f32,
    /// Tolerance (world units) of the layer selection.
    pub group_tolerance: f32,
    /// Absolute camera pitch limit in degrees.
    pub pitch_limit: f32,
    /// Camera degrees per unit of pointer delta.
    pub camera_sensitivity: f32,
    /// Window width in pixels (host only).
    pub window_width: u32,
    /// Window height in pixels (host only).
    pub window_height: u32,
    /// Target frames per second (host only).
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            piece_size: DEFAULT_PIECE_SIZE,
            move_speed: DEFAULT_MOVE_SPEED,
            scramble_speed: SCRAMBLE_MOVE_SPEED,
            scramble_steps: DEFAULT_SCRAMBLE_STEPS,
            drag_distance: DEFAULT_DRAG_DISTANCE,
            group_tolerance: DEFAULT_GROUP_TOLERANCE,
            pitch_limit: CAMERA_PITCH_LIMIT,
            camera_sensitivity: DEFAULT_CAMERA_SENSITIVITY,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
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
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: size={}, piece_size={}, move_speed={}, scramble_speed={}, scramble_steps={}",
            self.size, self.piece_size, self.move_speed, self.scramble_speed, self.scramble_steps
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| -> Option<f32> {
            config.getfloat(section, key).ok().flatten().map(|v| v as f32)
        };

        // [cube] section
        if let Some(size) = config.getint("cube", "size").ok().flatten() {
            self.size = Cube::clamp_size(size.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
        }
        if let Some(piece_size) = float("cube", "piece_size") {
            if piece_size > 0.0 {
                self.piece_size = piece_size;
            }
        }

        // [moves] section
        if let Some(speed) = float("moves", "move_speed") {
            self.move_speed = speed.max(MIN_SPEED);
        }
        if let Some(speed) = float("moves", "scramble_speed") {
            self.scramble_speed = speed.max(MIN_SPEED);
        }
        if let Some(steps) = config.getint("moves", "scramble_steps").ok().flatten() {
            self.scramble_steps = steps.clamp(0, 10_000) as i32;
        }

        // [gesture] section
        if let Some(distance) = float("gesture", "drag_distance") {
            self.drag_distance = distance.max(0.0);
        }
        if let Some(tolerance) = float("gesture", "group_tolerance") {
            self.group_tolerance = tolerance.max(0.0);
        }

        // [camera] section
        if let Some(limit) = float("camera", "pitch_limit") {
            self.pitch_limit = limit.clamp(0.0, 89.0);
        }
        if let Some(sensitivity) = float("camera", "sensitivity") {
            self.camera_sensitivity = sensitivity;
        }

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
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        config.set("cube", "size", Some(self.size.to_string()));
        config.set("cube", "piece_size", Some(self.piece_size.to_string()));

        config.set("moves", "move_speed", Some(self.move_speed.to_string()));
        config.set("moves", "scramble_speed", Some(self.scramble_speed.to_string()));
        config.set("moves", "scramble_steps", Some(self.scramble_steps.to_string()));

        config.set("gesture", "drag_distance", Some(self.drag_distance.to_string()));
        config.set("gesture", "group_tolerance", Some(self.group_tolerance.to_string()));

        config.set("camera", "pitch_limit", Some(self.pitch_limit.to_string()));
        config.set("camera", "sensitivity", Some(self.camera_sensitivity.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config
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

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }
}
