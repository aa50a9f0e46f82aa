//! Radial interaction and rendering engine for the hand-drawn balance wheel.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Each
//! category occupies one angular slice of the wheel, and the slice's filled
//! radius encodes an integer value the user sets by dragging outward along the
//! slice. The crate owns the full interaction loop: mapping raw pointer/touch
//! events into logical chart space, hit-testing slices and labels, running the
//! drag state machine, and painting the sketchy scene. The host JavaScript
//! layer owns the category list and applies the [`engine::Action`]s the engine
//! returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Orchestrator: testable [`engine::ChartCore`] and canvas-bound [`engine::Chart`] |
//! | [`bindings`] | `wasm-bindgen` facade wiring DOM events and JS callbacks |
//! | [`data`] | Category records and JSON loading |
//! | [`options`] | Host configuration and responsive sizing |
//! | [`coords`] | Points and the client-to-logical coordinate mapper |
//! | [`geometry`] | Chart geometry and slice angle math |
//! | [`hit`] | Slice and label hit-testing |
//! | [`input`] | Drag and hover state types |
//! | [`drag`] | The drag state machine and value derivation |
//! | [`sketch`] | Jittered hand-drawn primitives |
//! | [`surface`] | 2D drawing surface capability |
//! | [`render`] | Scene layout and the full rendering pass |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric and style constants |

pub mod bindings;
pub mod consts;
pub mod coords;
pub mod data;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod options;
pub mod render;
pub mod sketch;
pub mod surface;

#[cfg(test)]
mod recording;
