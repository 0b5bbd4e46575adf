//! Sinks for style entries dropped during normalization.
//!
//! Rejections are not errors: normalization always produces a result. They
//! are reported so a host can surface misconfigured overlays. Pick a sink:
//!
//! - [`TracingDiagnostics`]: logs each rejection with `tracing::warn!` (default)
//! - [`CollectingDiagnostics`]: keeps rejections for later inspection
//! - [`SilentDiagnostics`]: drops them
//!
//! Any `FnMut(&StyleRejection)` closure is a sink as well.

use crate::style::StyleRejection;

/// Receives style entries dropped during normalization.
pub trait Diagnostics {
    /// Called once per dropped entry, in input order.
    fn reject(&mut self, rejection: &StyleRejection);
}

impl<F> Diagnostics for F
where
    F: FnMut(&StyleRejection),
{
    fn reject(&mut self, rejection: &StyleRejection) {
        self(rejection)
    }
}

/// Logs rejections as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn reject(&mut self, rejection: &StyleRejection) {
        tracing::warn!(property = rejection.property(), "{}", rejection);
    }
}

/// Discards rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn reject(&mut self, _rejection: &StyleRejection) {}
}

/// Records rejections in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingDiagnostics {
    rejections: Vec<StyleRejection>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejections(&self) -> &[StyleRejection] {
        &self.rejections
    }

    /// Names of the rejected properties, in arrival order.
    pub fn properties(&self) -> Vec<&str> {
        self.rejections.iter().map(StyleRejection::property).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<StyleRejection> {
        std::mem::take(&mut self.rejections)
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn reject(&mut self, rejection: &StyleRejection) {
        self.rejections.push(rejection.clone());
    }
}
