use crate::error::ApiResult;

/// A type name split the way a compiler reports it: package (or outer type) plus simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    pub qualifier: String,
    pub simple_name: String,
}

impl QualifiedName {
    pub fn new(qualifier: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Splits a dotted name at its last `.`; a name without dots has an empty qualifier.
    pub fn split(fqn: &str) -> Self {
        match fqn.rfind('.') {
            Some(pos) => Self::new(&fqn[..pos], &fqn[pos + 1..]),
            None => Self::new("", fqn),
        }
    }

    pub fn to_fqn(&self) -> String {
        if self.qualifier.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.qualifier, self.simple_name)
        }
    }
}

/// Name lookup against the compile-time scope of a type.
///
/// This is the symbol model's half of signature resolution: given the FQN of a type and a
/// (possibly qualified) type name written inside it, report what the name binds to.
pub trait TypeScope {
    /// Returns `Ok(None)` when the name does not bind to exactly one type.
    ///
    /// An `Err` means the metadata of `scope` could not be read at all.
    fn resolve_simple_name(&self, scope: &str, identifier: &str)
    -> ApiResult<Option<QualifiedName>>;
}

impl<T: TypeScope + ?Sized> TypeScope for &T {
    fn resolve_simple_name(
        &self,
        scope: &str,
        identifier: &str,
    ) -> ApiResult<Option<QualifiedName>> {
        (**self).resolve_simple_name(scope, identifier)
    }
}
