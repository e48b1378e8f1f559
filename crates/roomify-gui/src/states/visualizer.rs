use roomify_core::visualizer::VisualizerView;

pub struct VisualizerState {
    pub view: VisualizerView,
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    /// Set when the handed-off payload could not be decoded for display.
    pub decode_error: Option<String>,
}

impl VisualizerState {
    pub fn new(view: VisualizerView) -> Self {
        Self {
            view,
            texture: None,
            image_size: None,
            decode_error: None,
        }
    }
}
