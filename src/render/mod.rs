pub mod paint;
pub mod surface;
pub mod recorder;
pub mod raster;
pub mod canvas;
pub mod stage;

pub use paint::{Color, GradientStop, LinearGradient, Paint};
pub use surface::{Rect, Surface};
pub use recorder::{DrawCommand, Recorder};
pub use raster::Raster;
pub use canvas::CanvasSurface;
pub use stage::Stage;
