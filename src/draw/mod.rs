//! Object drawing
//!
//! A [`DrawContext`] binds an object registry to a strip. Every tick it clears
//! the strip, renders all objects in registration order and then moves them
//! for the next frame.

mod context;
mod object;
mod registry;

pub use context::{DrawContext, bind};
pub use object::{BlinkState, Direction, DrawAction, DrawDuration, DrawObject, Expiry};
pub use registry::ObjectRegistry;
