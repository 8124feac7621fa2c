//! # silk-render
//!
//! Headless stand-ins for the rendering collaborator. A renderer receives
//! the mesh topology once and then one [`RenderFrame`] per step.
//!
//! ## Key Types
//!
//! - [`Renderer`]: Trait implemented by every output backend
//! - [`HeadlessRenderer`]: Counts frames and discards them
//! - [`JsonFrameExporter`]: Writes the whole animation as one JSON file

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
