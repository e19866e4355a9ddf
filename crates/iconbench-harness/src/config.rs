use std::time::Duration;

use iconbench_engine::assets::AssetPaths;
use iconbench_engine::compose::CompositorStyle;
use iconbench_engine::coords::Viewport;
use iconbench_engine::window::{RuntimeConfig, WindowMode};

/// Title the window carries once every asset has loaded.
pub const READY_TITLE: &str = "Window";

/// Everything the harness needs to start.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub title: String,
    pub window_mode: WindowMode,
    /// Size of the composition buffer. `None` uses the window's output size.
    pub logical_size: Option<Viewport>,
    pub assets: AssetPaths,
    pub style: CompositorStyle,
    pub redraw_interval: Duration,
}

impl HarnessConfig {
    /// Windowed 480x800 with assets under `/tmp/`.
    pub fn desktop() -> Self {
        Self {
            title: "GW".to_string(),
            window_mode: WindowMode::Windowed { width: 480, height: 800 },
            logical_size: Some(Viewport::new(480, 800)),
            assets: AssetPaths::new("/tmp/"),
            style: CompositorStyle::default(),
            redraw_interval: Duration::from_millis(10_000),
        }
    }

    /// Fullscreen at the display's output size, assets relative to the
    /// working directory.
    pub fn device() -> Self {
        Self {
            window_mode: WindowMode::Fullscreen,
            logical_size: None,
            assets: AssetPaths::default(),
            ..Self::desktop()
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            mode: self.window_mode,
            redraw_interval: self.redraw_interval,
        }
    }

    /// Composition size for a window whose drawable is `output`.
    pub fn composition_size(&self, output: Viewport) -> Viewport {
        self.logical_size.unwrap_or(output)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        if cfg!(feature = "desktop") {
            Self::desktop()
        } else {
            Self::device()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn desktop_uses_fixed_logical_size() {
        let cfg = HarnessConfig::desktop();
        assert_eq!(cfg.window_mode, WindowMode::Windowed { width: 480, height: 800 });
        assert_eq!(cfg.composition_size(Viewport::new(960, 1600)), Viewport::new(480, 800));
        assert_eq!(cfg.assets.font_path(), PathBuf::from("/tmp/Arimo-Bold.ttf"));
        assert_eq!(cfg.assets.icon_path(), PathBuf::from("/tmp/something.png"));
    }

    #[test]
    fn device_follows_output_size() {
        let cfg = HarnessConfig::device();
        assert_eq!(cfg.window_mode, WindowMode::Fullscreen);
        assert_eq!(cfg.composition_size(Viewport::new(1080, 2340)), Viewport::new(1080, 2340));
        assert_eq!(cfg.assets.font_path(), PathBuf::from("Arimo-Bold.ttf"));
    }

    #[test]
    fn runtime_config_carries_title_and_interval() {
        let cfg = HarnessConfig::desktop();
        let rt = cfg.runtime_config();
        assert_eq!(rt.title, "GW");
        assert_eq!(rt.redraw_interval, Duration::from_secs(10));
        assert_eq!(rt.mode, cfg.window_mode);
    }

    #[test]
    fn default_matches_build_flavor() {
        let cfg = HarnessConfig::default();
        let expected = if cfg!(feature = "desktop") { Some(Viewport::new(480, 800)) } else { None };
        assert_eq!(cfg.logical_size, expected);
    }
}
