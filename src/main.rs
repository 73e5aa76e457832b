use clap::Parser;
use fractal_canvas::{PpmFilePresenter, RenderArgs, RenderFileController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = RenderArgs::parse();
    let config = args.to_config();

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut controller = RenderFileController::new(PpmFilePresenter::new());

    controller.generate(&config, args.canvas_size(), args.render_mode())?;
    controller.write(&args.output)?;

    Ok(())
}
