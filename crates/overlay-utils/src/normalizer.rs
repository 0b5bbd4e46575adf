//! Configured entry point for normalization.

use serde_json::{Map, Value};

use crate::apis::normalize_apis_with;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::style::normalize_style_with;

/// Normalizes overlay styles and API objects, reporting rejected style
/// entries to a configurable [`Diagnostics`] sink.
///
/// `Normalizer::new()` logs through `tracing`, like the free functions.
///
/// # Example
///
/// ```rust
/// use overlay_utils::{Normalizer, StyleRejection};
/// use serde_json::json;
///
/// let mut warnings = Vec::new();
/// let mut normalizer = Normalizer::new()
///     .with_diagnostics(|r: &StyleRejection| warnings.push(r.to_string()));
///
/// let apis = normalizer.normalize_apis(&json!({ "style": "margin: 0; --gap: 4px" }));
/// assert_eq!(apis["style"], "--gap:4px");
/// drop(normalizer);
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer<D = TracingDiagnostics> {
    diagnostics: D,
}

impl Normalizer {
    /// Creates a normalizer that logs rejections through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Diagnostics> Normalizer<D> {
    /// Replaces the diagnostics sink.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> Normalizer<E> {
        Normalizer { diagnostics }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut D {
        &mut self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    /// See [`normalize_style`](crate::normalize_style).
    pub fn normalize_style(&mut self, style: &Value) -> String {
        normalize_style_with(style, &mut self.diagnostics)
    }

    /// See [`normalize_apis`](crate::normalize_apis).
    pub fn normalize_apis(&mut self, apis: &Value) -> Map<String, Value> {
        normalize_apis_with(apis, &mut self.diagnostics)
    }
}
