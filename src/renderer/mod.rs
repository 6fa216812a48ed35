//! Rendering module
//!
//! Scenes record `DrawCmd`s into a `DrawList`; `shapes` turns the geometric
//! commands into triangle lists for whatever backend presents them.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{Color, DrawCmd, DrawList};
pub use vertex::{Vertex, colors};
