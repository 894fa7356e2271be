//! Command-line arguments for both binaries.

use std::path::PathBuf;

use clap::{Args, Parser};

use turntable_control::ControlConfig;
use turntable_engine::asset::AssetSource;
use turntable_engine::logging::LoggingConfig;

use crate::viewer::DEFAULT_MODEL_URL;

/// Flags shared by both viewers.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CommonArgs {
    /// World units moved per arrow/page key press
    #[arg(long, value_name = "F")]
    pub move_step: Option<f32>,

    /// Joystick deadzone in [0, 1)
    #[arg(long, value_name = "F")]
    pub deadzone: Option<f32>,

    /// Log filter (env_logger syntax); overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Do not open the OS gamepad backend
    #[arg(long)]
    pub no_gamepad: bool,
}

impl CommonArgs {
    /// `ControlConfig` defaults with the given flags applied.
    pub fn controls(&self) -> ControlConfig {
        let mut config = ControlConfig::default();
        if let Some(step) = self.move_step {
            config.move_step = step;
        }
        if let Some(deadzone) = self.deadzone {
            config.deadzone = deadzone;
        }
        config
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig::with_filter(self.log.clone())
    }
}

#[derive(Parser, Debug)]
#[command(name = "turntable-model")]
#[command(about = "Interactive viewer for a remote or local glTF model")]
pub struct ModelArgs {
    /// glTF/GLB URL to load
    #[arg(long, conflicts_with = "path")]
    pub url: Option<String>,

    /// Local .gltf or .glb file to load
    #[arg(long)]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ModelArgs {
    pub fn source(&self) -> AssetSource {
        match (&self.url, &self.path) {
            (_, Some(path)) => AssetSource::File(path.clone()),
            (Some(url), None) => AssetSource::Url(url.clone()),
            (None, None) => AssetSource::Url(DEFAULT_MODEL_URL.to_string()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "turntable-cube")]
#[command(about = "Interactive viewer for a generated cube")]
pub struct CubeArgs {
    /// Cube edge length in model units
    #[arg(long, value_name = "F", default_value_t = 1.0)]
    pub edge: f32,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_defaults_to_remote_asset() {
        let args = ModelArgs::try_parse_from(["turntable-model"]).unwrap();
        assert_eq!(args.source(), AssetSource::Url(DEFAULT_MODEL_URL.into()));
        assert_eq!(args.common.controls(), ControlConfig::default());
    }

    #[test]
    fn model_path_selects_file_source() {
        let args = ModelArgs::try_parse_from(["turntable-model", "--path", "duck.glb"]).unwrap();
        assert_eq!(args.source(), AssetSource::File("duck.glb".into()));
    }

    #[test]
    fn url_and_path_conflict() {
        let res = ModelArgs::try_parse_from(["turntable-model", "--url", "http://x/a.gltf", "--path", "a.gltf"]);
        assert!(res.is_err());
    }

    #[test]
    fn control_flags_override_defaults() {
        let args = CubeArgs::try_parse_from([
            "turntable-cube", "--edge", "2.5", "--move-step", "1.5", "--deadzone", "0.2",
        ])
        .unwrap();
        assert_eq!(args.edge, 2.5);
        let controls = args.common.controls();
        assert_eq!(controls.move_step, 1.5);
        assert_eq!(controls.deadzone, 0.2);
        assert_eq!(controls.rotate_step, ControlConfig::default().rotate_step);
    }

    #[test]
    fn log_flag_becomes_filter() {
        let args = CubeArgs::try_parse_from(["turntable-cube", "--log", "debug"]).unwrap();
        assert_eq!(args.common.logging().filter.as_deref(), Some("debug"));
        assert!(!args.common.no_gamepad);
    }
}
