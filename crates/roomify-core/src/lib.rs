pub mod config;
pub mod consts;
pub mod error;
pub mod handoff;
pub mod upload;
pub mod visualizer;
