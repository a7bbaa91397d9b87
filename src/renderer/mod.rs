//! Rendering module
//!
//! The scene is drawn against the `Surface` trait. `ShapeBatch` tessellates
//! shapes into triangles and queues text; `RenderState` draws the triangles
//! through WebGPU and paints the text with egui on top.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::draw_scene;
pub use shapes::ShapeBatch;
pub use surface::{Font, Surface, Typeface};
pub use text::{TextPainter, TextRun};
pub use vertex::{Color, Vertex};
