//! Falling-code animation for hackrain.
//!
//! A [`Scene`] owns a set of vertical glyph streams ([`Line`]s) and a static
//! [`Banner`]. The host calls [`Scene::resize`] when the viewport changes and
//! [`Scene::step`] once per frame.

mod banner;
mod line;
mod render;
mod scene;

pub use banner::{BANNER_BACKING, BANNER_TINT, Banner};
pub use line::{Advance, Glyph, Line, MAX_LENGTH, MAX_SPEED, MIN_LENGTH, MIN_SPEED};
pub use scene::Scene;
