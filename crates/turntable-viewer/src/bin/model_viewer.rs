use clap::Parser;

use turntable_engine::logging::init_logging;
use turntable_viewer::cli::ModelArgs;
use turntable_viewer::Viewer;

fn main() {
    let args = ModelArgs::parse();
    init_logging(args.common.logging());

    let source = args.source();
    let result = Viewer::new()
        .title(format!("turntable - {source}"))
        .source(source)
        .controls(args.common.controls())
        .gamepads(!args.common.no_gamepad)
        .run();

    if let Err(e) = result {
        eprintln!("turntable runtime error: {e:#}");
        std::process::exit(1);
    }
}
