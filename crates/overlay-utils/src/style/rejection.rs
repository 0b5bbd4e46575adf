//! Rejected style entries.

/// A style entry dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleRejection {
    /// The property name does not start with `--`.
    NotCustomProperty { property: String },
    /// The property is a custom property but its value is not a string.
    NonStringValue { property: String },
}

impl StyleRejection {
    /// Name of the rejected property, as it appeared in the input.
    pub fn property(&self) -> &str {
        match self {
            StyleRejection::NotCustomProperty { property }
            | StyleRejection::NonStringValue { property } => property,
        }
    }
}

impl std::fmt::Display for StyleRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Overlay 'style' only supports CSS Variables (invalid '{}' set)",
            self.property()
        )
    }
}

impl std::error::Error for StyleRejection {}
