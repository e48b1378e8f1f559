mod upload;
mod visualizer;

pub use upload::UploadUiState;
pub use visualizer::VisualizerState;

/// Which page the central panel shows.
pub enum Page {
    Upload,
    Visualizer(Box<VisualizerState>),
}
