use fractal_canvas::ExplorerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    fractal_canvas::run_gui(ExplorerConfig::showcase())?;

    Ok(())
}
