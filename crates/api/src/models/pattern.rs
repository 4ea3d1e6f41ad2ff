use super::symbol::SymbolKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe option values identifying one symbol for the remote search service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchPattern {
    Type {
        fully_qualified_type_name: String,
    },
    Method {
        method_pattern: String,
    },
    Field {
        fully_qualified_type_name: String,
        field_name: String,
    },
}

impl SearchPattern {
    pub fn kind(&self) -> SymbolKind {
        match self {
            SearchPattern::Type { .. } => SymbolKind::Type,
            SearchPattern::Method { .. } => SymbolKind::Method,
            SearchPattern::Field { .. } => SymbolKind::Field,
        }
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPattern::Type {
                fully_qualified_type_name,
            } => write!(f, "{}", fully_qualified_type_name),
            SearchPattern::Method { method_pattern } => write!(f, "{}", method_pattern),
            SearchPattern::Field {
                fully_qualified_type_name,
                field_name,
            } => write!(f, "{}#{}", fully_qualified_type_name, field_name),
        }
    }
}

/// Identifier of a recipe run started by the search service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
