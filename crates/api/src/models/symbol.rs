use serde::{Deserialize, Serialize};
use std::fmt;

/// A Java element selected by the user. Created per invocation and never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CodeSymbol {
    Type(TypeSymbol),
    Method(MethodSymbol),
    Field(FieldSymbol),
}

impl CodeSymbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            CodeSymbol::Type(_) => SymbolKind::Type,
            CodeSymbol::Method(_) => SymbolKind::Method,
            CodeSymbol::Field(_) => SymbolKind::Field,
        }
    }

    /// Fully qualified name of the type that owns this symbol (the type itself for `Type`).
    pub fn owner_fqn(&self) -> &str {
        match self {
            CodeSymbol::Type(t) => &t.fqn,
            CodeSymbol::Method(m) => &m.declaring_type.fqn,
            CodeSymbol::Field(f) => &f.declaring_type,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Type,
    Method,
    Field,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Type => write!(f, "type"),
            SymbolKind::Method => write!(f, "method"),
            SymbolKind::Field => write!(f, "field"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    pub fqn: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldSymbol {
    pub declaring_type: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    pub declaring_type: DeclaringType,
    pub name: String,
    #[serde(default)]
    pub is_constructor: bool,
    pub parameters: MethodParameters,
    /// Type parameters declared on the method itself (`<T extends Foo> void m(T t)`).
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
}

/// Parameter types as the symbol model reports them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MethodParameters {
    /// One type signature per parameter, possibly unresolved (`QString;`, `[QT;`).
    Source(Vec<String>),
    /// Erased JVM method descriptor of a compiled method, e.g. `(Ljava/lang/String;[I)V`.
    Binary(String),
}

/// A type that declares a member, together with the chain of types enclosing it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeclaringType {
    pub fqn: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    #[serde(default)]
    pub enclosing: Option<Box<DeclaringType>>,
}

impl DeclaringType {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self {
            fqn: fqn.into(),
            type_parameters: Vec::new(),
            enclosing: None,
        }
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParameter>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn enclosed_by(mut self, outer: DeclaringType) -> Self {
        self.enclosing = Some(Box::new(outer));
        self
    }

    /// Iterates from this type outward through its enclosing types.
    pub fn ancestry(&self) -> impl Iterator<Item = &DeclaringType> {
        std::iter::successors(Some(self), |t| t.enclosing.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    /// Bound type names in source form (`Number`, `Comparable<T>`). Empty when unbounded.
    #[serde(default)]
    pub bounds: Vec<String>,
}

impl TypeParameter {
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bound: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: vec![bound.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestry_walks_outward() {
        let inner = DeclaringType::new("a.Outer.Inner")
            .enclosed_by(DeclaringType::new("a.Outer").enclosed_by(DeclaringType::new("a.Top")));

        let names: Vec<_> = inner.ancestry().map(|t| t.fqn.as_str()).collect();
        assert_eq!(names, vec!["a.Outer.Inner", "a.Outer", "a.Top"]);
    }

    #[test]
    fn test_symbol_json_shape() {
        let json = r#"{
            "kind": "method",
            "declaring_type": { "fqn": "com.acme.Box", "type_parameters": [{ "name": "T", "bounds": ["Number"] }] },
            "name": "put",
            "parameters": { "source": ["QT;"] }
        }"#;
        let symbol: CodeSymbol = serde_json::from_str(json).unwrap();

        assert_eq!(symbol.kind(), SymbolKind::Method);
        assert_eq!(symbol.owner_fqn(), "com.acme.Box");
        match symbol {
            CodeSymbol::Method(m) => {
                assert!(!m.is_constructor);
                assert_eq!(m.parameters, MethodParameters::Source(vec!["QT;".into()]));
                assert_eq!(m.declaring_type.type_parameters[0].bounds, vec!["Number"]);
            }
            other => panic!("Expected method symbol, got {:?}", other),
        }
    }
}
