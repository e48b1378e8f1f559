pub mod navbar;
pub mod upload;
pub mod visualizer;
