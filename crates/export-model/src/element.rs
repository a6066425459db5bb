//! Model element kinds and loaded elements.

use serde::{Deserialize, Serialize};

/// The categories of model artifacts the exporter enumerates.
///
/// `ALL` fixes the export order; kinds are processed one after another,
/// never interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Constant,
    DomainModel,
    Enumeration,
    Microflow,
    Page,
    Snippet,
}

impl ElementKind {
    /// Every kind, in export order.
    pub const ALL: [ElementKind; 6] = [
        Self::Constant,
        Self::DomainModel,
        Self::Enumeration,
        Self::Microflow,
        Self::Page,
        Self::Snippet,
    ];

    /// The bracket tag appended to exported file names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Constant => "CONSTANT",
            Self::DomainModel => "DOMAIN MODEL",
            Self::Enumeration => "ENUMERATION",
            Self::Microflow => "MICROFLOW",
            Self::Page => "PAGE",
            Self::Snippet => "SNIPPET",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A fully loaded, serialized model element.
///
/// `qualified_name` is the fully scoped identifier for most kinds. Domain
/// models are scoped per module on the platform, so their `qualified_name`
/// carries the owning module's name instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub qualified_name: String,
    /// Serialized textual representation, written to disk verbatim.
    pub source: String,
}

impl Element {
    /// The desired file name for this element, before sanitization.
    pub fn file_label(&self) -> String {
        format!("{} [{}]", self.qualified_name, self.kind.label())
    }
}
