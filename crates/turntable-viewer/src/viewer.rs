use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use turntable_control::ControlConfig;
use turntable_engine::asset::AssetSource;
use turntable_engine::device::GpuInit;
use turntable_engine::window::{Runtime, RuntimeConfig};

use crate::app::ViewerApp;

/// Asset shown by the model viewer when no source is given.
pub const DEFAULT_MODEL_URL: &str =
    "https://raw.githubusercontent.com/HShaebi11/Custom-Model-02/main/assets/smile.gltf";

/// What the viewer displays.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A glTF asset, loaded in the background after the window opens.
    Asset(AssetSource),
    /// A generated cube with the given edge length, available immediately.
    Cube { edge: f32 },
}

/// Viewer builder.
///
/// ```rust,ignore
/// Viewer::new()
///     .title("smile")
///     .content(Content::Asset(AssetSource::Url(DEFAULT_MODEL_URL.into())))
///     .run()?;
/// ```
pub struct Viewer {
    title:    String,
    width:    f64,
    height:   f64,
    content:  Content,
    controls: ControlConfig,
    gamepads: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            title:    "turntable".to_string(),
            width:    1280.0,
            height:   720.0,
            content:  Content::Asset(AssetSource::Url(DEFAULT_MODEL_URL.to_string())),
            controls: ControlConfig::default(),
            gamepads: true,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Shorthand for `content(Content::Asset(source))`.
    pub fn source(self, source: AssetSource) -> Self {
        self.content(Content::Asset(source))
    }

    pub fn controls(mut self, controls: ControlConfig) -> Self {
        self.controls = controls;
        self
    }

    /// Enable or disable the OS gamepad backend.
    pub fn gamepads(mut self, enabled: bool) -> Self {
        self.gamepads = enabled;
        self
    }

    /// Opens the window and runs until it is closed.
    pub fn run(self) -> Result<()> {
        self.controls.validate().context("invalid control settings")?;
        if let Content::Cube { edge } = self.content {
            anyhow::ensure!(edge.is_finite() && edge > 0.0, "cube edge must be positive, got {edge}");
        }

        let config = RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            gamepads:     self.gamepads,
        };
        let app = ViewerApp::new(self.title, self.content, self.controls);

        Runtime::run(config, GpuInit::default(), app)
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}
