//! # Overlay Utils - Slot Keys and Style Normalization for Overlays
//!
//! Small, stateless helpers shared by overlay components (modals, popovers,
//! tooltips):
//!
//! - [`OverlaySlot`]: unique keys marking optional static configuration on an
//!   overlay definition
//! - [`normalize_style`]: keeps only CSS custom properties (`--name:value`)
//! - [`normalize_apis`]: shallow-copies an API object and normalizes its `style`
//!
//! ## Quick Start
//!
//! ```rust
//! use overlay_utils::{normalize_apis, normalize_style};
//! use serde_json::json;
//!
//! assert_eq!(normalize_style(&json!("--a: 1; --b:2")), "--a:1;--b:2");
//!
//! let apis = normalize_apis(&json!({ "foo": 1, "style": "--a:1" }));
//! assert_eq!(apis["foo"], 1);
//! assert_eq!(apis["style"], "--a:1");
//! ```
//!
//! ## Diagnostics
//!
//! Normalization never fails. Entries that are not custom properties are
//! dropped and reported to a [`Diagnostics`] sink. The free functions log
//! through [`TracingDiagnostics`]; use a [`Normalizer`] to inject another sink:
//!
//! ```rust
//! use overlay_utils::{CollectingDiagnostics, Normalizer};
//! use serde_json::json;
//!
//! let mut normalizer = Normalizer::new().with_diagnostics(CollectingDiagnostics::new());
//! assert_eq!(normalizer.normalize_style(&json!("color: red; --a:1")), "--a:1");
//! assert_eq!(normalizer.diagnostics().properties(), vec!["color"]);
//! ```

mod apis;
mod diagnostics;
mod normalizer;
mod slot;
pub mod style;
mod util;

pub use apis::{normalize_apis, STYLE_KEY};
pub use diagnostics::{CollectingDiagnostics, Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use normalizer::Normalizer;
pub use slot::{OverlaySlot, INSTANCE_NAME, PARENT, PROPERTIES, REQUIRED_PROPERTIES, SECURE};
pub use style::{normalize_style, StyleRejection, StyleSpec};
pub use util::is_truthy;
