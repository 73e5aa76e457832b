use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize::pipeline::RenderPipeline;
use crate::core::config::errors::ConfigError;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub enum RenderFileError {
    Config(ConfigError),
    EmptyCanvas { size: CanvasSize },
    NothingRendered,
    Io(std::io::Error),
}

impl fmt::Display for RenderFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {}", err),
            Self::EmptyCanvas { size } => {
                write!(f, "cannot render a {}x{} image", size.width, size.height)
            }
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
            Self::Io(err) => write!(f, "failed to write image: {}", err),
        }
    }
}

impl Error for RenderFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::EmptyCanvas { .. } | Self::NothingRendered => None,
        }
    }
}

impl From<ConfigError> for RenderFileError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for RenderFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// How the headless renderer spreads work over cores.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Sequential,
    /// Rows fan out over the rayon thread pool.
    Parallel,
}

/// Renders a single frame from a configuration and hands it to a file
/// presenter.
pub struct RenderFileController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderFileController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: &ExplorerConfig,
        size: CanvasSize,
        mode: RenderMode,
    ) -> Result<&PixelBuffer, RenderFileError> {
        if size.is_empty() {
            return Err(RenderFileError::EmptyCanvas { size });
        }

        let viewport = config.initial_viewport()?;
        let pipeline = RenderPipeline::from_config(config);

        info!(
            width = size.width,
            height = size.height,
            max_iterations = config.max_iterations,
            evaluator = pipeline.evaluator().display_name(),
            colour_map = pipeline.colour_map().display_name(),
            ?mode,
            "rendering fractal"
        );

        let start = Instant::now();
        let buffer = match mode {
            RenderMode::Sequential => pipeline.render(&viewport, size),
            RenderMode::Parallel => pipeline.render_rayon(&viewport, size),
        };

        info!(elapsed = ?start.elapsed(), "render finished");

        Ok(self.buffer.insert(buffer))
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderFileError> {
        let buffer = self.buffer.as_ref().ok_or(RenderFileError::NothingRendered)?;

        self.presenter.present(buffer, filepath.as_ref())?;
        info!(path = %filepath.as_ref().display(), "image saved");

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, CanvasSize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.size()));
            Ok(())
        }
    }

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            max_iterations: 20,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn test_generate_then_write() {
        let mut controller = RenderFileController::new(RecordingPresenter::default());

        let size = CanvasSize::new(16, 9);
        let buffer = controller
            .generate(&small_config(), size, RenderMode::Sequential)
            .unwrap();
        assert_eq!(buffer.size(), size);

        controller.write("out.ppm").unwrap();

        let written = controller.presenter.written.borrow();
        assert_eq!(
            written.as_slice(),
            &[(PathBuf::from("out.ppm"), CanvasSize::new(16, 9))]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = small_config();
        let size = CanvasSize::new(23, 17);
        let mut sequential = RenderFileController::new(RecordingPresenter::default());
        let mut parallel = RenderFileController::new(RecordingPresenter::default());

        sequential
            .generate(&config, size, RenderMode::Sequential)
            .unwrap();
        parallel.generate(&config, size, RenderMode::Parallel).unwrap();

        assert_eq!(sequential.buffer(), parallel.buffer());
    }

    #[test]
    fn test_write_before_generate_fails() {
        let controller = RenderFileController::new(RecordingPresenter::default());

        assert!(matches!(
            controller.write("out.ppm"),
            Err(RenderFileError::NothingRendered)
        ));
    }

    #[test]
    fn test_generate_rejects_empty_size_and_bad_config() {
        let mut controller = RenderFileController::new(RecordingPresenter::default());

        let empty = CanvasSize::new(0, 4);
        assert!(matches!(
            controller.generate(&small_config(), empty, RenderMode::Sequential),
            Err(RenderFileError::EmptyCanvas { .. })
        ));

        let config = ExplorerConfig {
            initial_scale: -1.0,
            ..small_config()
        };
        assert!(matches!(
            controller.generate(&config, CanvasSize::new(4, 4), RenderMode::Sequential),
            Err(RenderFileError::Config(ConfigError::InvalidInitialScale { .. }))
        ));
        assert!(controller.buffer().is_none());
    }
}
