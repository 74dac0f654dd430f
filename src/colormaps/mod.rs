//! Colormap implementations.
//!
//! `discrete` holds the magnitude palette that actually colors the map.
//! `sequential` provides a continuous ramp over a data range; it is available
//! as library API but the rendering pipeline does not use it.

pub mod colormap;
pub mod discrete;
pub mod sequential;

pub use colormap::{get_colormap, Colormap};
pub use discrete::{magnitude_color, Rgba};
pub use sequential::YlOrBr;
