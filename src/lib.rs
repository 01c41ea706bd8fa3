pub mod audio;
pub mod term;
pub mod visual;

pub use audio::{AudioError, AudioFormat};
pub use visual::Visualizer;
