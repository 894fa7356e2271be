use clap::Parser;

use turntable_engine::logging::init_logging;
use turntable_viewer::cli::CubeArgs;
use turntable_viewer::{Content, Viewer};

fn main() {
    let args = CubeArgs::parse();
    init_logging(args.common.logging());

    let result = Viewer::new()
        .title("turntable - cube")
        .content(Content::Cube { edge: args.edge })
        .controls(args.common.controls())
        .gamepads(!args.common.no_gamepad)
        .run();

    if let Err(e) = result {
        eprintln!("turntable runtime error: {e:#}");
        std::process::exit(1);
    }
}
