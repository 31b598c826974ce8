use panelray_core::{Color, RepaintPolicy};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/panelray.toml";

/// Demo configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub surface: SurfaceConfig,
    /// Canvas backdrop color as RGBA bytes.
    pub background: Color,
    /// When pointer movement alone forces a repaint.
    pub repaint_policy: RepaintPolicy,
    /// Number of simulated frames to run.
    pub frames: u32,
    /// Upload the raster to a GPU texture after dirty frames.
    pub gpu_upload: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    /// Pixel-to-world-unit scale.
    pub scale: f32,
    /// Surface center position in world space.
    pub position: [f32; 3],
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            scale: 0.001,
            position: [0.0, 1.5, -0.5],
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            background: Color::GREEN,
            repaint_policy: RepaintPolicy::default(),
            frames: 120,
            gpu_upload: false,
        }
    }
}

impl DemoConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<DemoConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    DemoConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound
                    || path != Path::new(DEFAULT_CONFIG_PATH)
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Demo config not found at {}. Using defaults",
                        path.display()
                    );
                }
                DemoConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DemoConfig::default();
        assert_eq!(cfg.surface.width, 1024);
        assert_eq!(cfg.surface.height, 768);
        assert_eq!(cfg.repaint_policy, RepaintPolicy::CursorMovement);
        assert!(!cfg.gpu_upload);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: DemoConfig = toml::from_str(
            r#"
            frames = 30
            repaint_policy = "hover_changes_only"

            [surface]
            width = 640
            "#,
        )
        .unwrap();
        assert_eq!(cfg.frames, 30);
        assert_eq!(cfg.repaint_policy, RepaintPolicy::HoverChangesOnly);
        assert_eq!(cfg.surface.width, 640);
        assert_eq!(cfg.surface.height, 768);
        assert_eq!(cfg.background, Color::GREEN);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let cfg = DemoConfig::load_from_path(Path::new("does/not/exist.toml"));
        assert_eq!(cfg.frames, DemoConfig::default().frames);
    }
}
