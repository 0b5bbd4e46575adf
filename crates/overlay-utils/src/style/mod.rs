//! Style normalization for overlays.
//!
//! Overlays only accept CSS custom properties (`--name: value`) as style.
//! This module reduces a user-supplied style, given as declaration text or as
//! a property mapping, to a compact custom-property string:
//!
//! - [`StyleSpec`]: the input, classified once as text, mapping or neither
//! - [`StyleRejection`]: why an entry was dropped
//! - [`normalize_style`] / [`normalize_style_with`]: the normalization itself
//!
//! Entries that are not custom properties are dropped, never fatal.

mod normalize;
mod rejection;
mod spec;

pub use normalize::{normalize_style, normalize_style_with, CUSTOM_PROPERTY_PREFIX};
pub use rejection::StyleRejection;
pub use spec::StyleSpec;
