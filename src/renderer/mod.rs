//! 2D rendering
//!
//! The game draws through the `Canvas` primitives; `VertexCanvas` turns
//! them into a triangle list.

pub mod canvas;
pub mod draw;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, VertexCanvas};
pub use draw::{draw_bomp, draw_bomps};
pub use vertex::Vertex;
