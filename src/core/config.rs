//=========================================================================
// Bridge Configuration
//=========================================================================
//
// Defaults for subsystem bootstrap and object construction, loadable from
// TOML. Missing keys fall back to `Default`.
//
// ```toml
// init_flags = 0x20            # INIT_VIDEO
// max_events_per_drain = 64
//
// [window]
// title = "demo"
// w = 800
// h = 600
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::native::consts;

//=== ConfigError =========================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

//=== WindowSpec ==========================================================

/// Window constructor parameters `(title, x, y, w, h, flags)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSpec {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub flags: u32,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, w: i32, h: i32) -> Self {
        Self {
            title: title.into(),
            w,
            h,
            ..Self::default()
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn centered(self) -> Self {
        self.at(consts::WINDOWPOS_CENTERED, consts::WINDOWPOS_CENTERED)
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            title: "media_bridge".to_string(),
            x: consts::WINDOWPOS_UNDEFINED,
            y: consts::WINDOWPOS_UNDEFINED,
            w: 640,
            h: 480,
            flags: consts::WINDOW_SHOWN,
        }
    }
}

//=== RendererSpec ========================================================

/// Renderer constructor parameters `(index, flags)`. Index `-1` lets the
/// native layer pick the first driver supporting `flags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererSpec {
    pub index: i32,
    pub flags: u32,
}

impl Default for RendererSpec {
    fn default() -> Self {
        Self {
            index: -1,
            flags: consts::RENDERER_ACCELERATED,
        }
    }
}

//=== BridgeConfig ========================================================

/// Configuration for a [`Subsystem`](crate::core::Subsystem).
///
/// # Default Values
///
/// - **init_flags**: `INIT_EVERYTHING`
/// - **window**: 640x480, position undefined, `WINDOW_SHOWN`
/// - **renderer**: index -1, `RENDERER_ACCELERATED`
/// - **max_events_per_drain**: 256
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub init_flags: u32,
    pub max_events_per_drain: usize,
    pub window: WindowSpec,
    pub renderer: RendererSpec,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            init_flags: consts::INIT_EVERYTHING,
            max_events_per_drain: 256,
            window: WindowSpec::default(),
            renderer: RendererSpec::default(),
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Builder ----------------------------------------------------------

    pub fn with_init_flags(mut self, flags: u32) -> Self {
        self.init_flags = flags;
        self
    }

    /// Sets the default window parameters.
    ///
    /// # Panics
    ///
    /// Panics if `w` or `h` is not positive.
    pub fn with_window(mut self, window: WindowSpec) -> Self {
        assert!(
            window.w > 0 && window.h > 0,
            "Window size must be positive, got {}x{}",
            window.w,
            window.h
        );
        self.window = window;
        self
    }

    /// Sets the default renderer parameters.
    ///
    /// # Panics
    ///
    /// Panics if `index < -1`.
    pub fn with_renderer(mut self, renderer: RendererSpec) -> Self {
        assert!(renderer.index >= -1, "Renderer index must be >= -1, got {}", renderer.index);
        self.renderer = renderer;
        self
    }

    /// Caps how many events one `poll_iter` drain yields.
    ///
    /// # Panics
    ///
    /// Panics if `limit == 0`.
    pub fn with_max_events_per_drain(mut self, limit: usize) -> Self {
        assert!(limit > 0, "Drain limit must be positive");
        self.max_events_per_drain = limit;
        self
    }

    //--- Validation -------------------------------------------------------

    /// Checks values that deserialization cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.w <= 0 || self.window.h <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.w, self.window.h
            )));
        }
        if self.renderer.index < -1 {
            return Err(ConfigError::Invalid(format!(
                "renderer index must be >= -1, got {}",
                self.renderer.index
            )));
        }
        if self.max_events_per_drain == 0 {
            return Err(ConfigError::Invalid("max_events_per_drain must be positive".to_string()));
        }
        Ok(())
    }

    //--- Persistence ------------------------------------------------------

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Loads a `.toml` file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        Self::require_toml(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        Self::require_toml(path)?;
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    fn require_toml(path: &Path) -> Result<(), ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(()),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
