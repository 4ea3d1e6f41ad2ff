use modfind_api::{ApiError, ApiResult, QualifiedName, TypeScope};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Types of `java.lang` that are visible without an import.
const JAVA_LANG_CLASSES: &[&str] = &[
    "String",
    "Object",
    "Integer",
    "Long",
    "Double",
    "Float",
    "Boolean",
    "Byte",
    "Character",
    "Short",
    "Number",
    "CharSequence",
    "Exception",
    "RuntimeException",
    "Throwable",
    "Error",
    "Thread",
    "System",
    "Class",
    "Enum",
    "Iterable",
    "Runnable",
    "Comparable",
    "StringBuilder",
    "Void",
];

/// What the compilation unit of one type can see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeContext {
    #[serde(default)]
    pub package: Option<String>,
    /// Single-type imports, e.g. `java.util.List`.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Simple names of member types declared inside this type.
    #[serde(default)]
    pub member_types: Vec<String>,
    /// Simple names of the other types in the same package.
    #[serde(default)]
    pub package_types: Vec<String>,
}

/// In-memory [`TypeScope`] keyed by the FQN of each known type.
///
/// Lookups follow Java's shadowing order: member types, single-type imports,
/// same-package types, then the implicit `java.lang` import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportTable {
    types: HashMap<String, TypeContext>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fqn: impl Into<String>, context: TypeContext) {
        self.types.insert(fqn.into(), context);
    }

    pub fn with_type(mut self, fqn: impl Into<String>, context: TypeContext) -> Self {
        self.insert(fqn, context);
        self
    }

    pub fn get(&self, fqn: &str) -> Option<&TypeContext> {
        self.types.get(fqn)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeScope for ImportTable {
    fn resolve_simple_name(
        &self,
        scope: &str,
        identifier: &str,
    ) -> ApiResult<Option<QualifiedName>> {
        let context = self
            .types
            .get(scope)
            .ok_or_else(|| ApiError::UnknownType(scope.to_string()))?;

        if identifier.is_empty() {
            return Ok(None);
        }

        // Qualified names: resolve the first segment, keep the rest as written.
        if let Some((head, tail)) = identifier.split_once('.') {
            let starts_lowercase = head.chars().next().is_some_and(char::is_lowercase);
            if starts_lowercase {
                return Ok(Some(QualifiedName::split(identifier)));
            }
            return Ok(self
                .resolve_simple_name(scope, head)?
                .map(|outer| QualifiedName::split(&format!("{}.{}", outer.to_fqn(), tail))));
        }

        if context.member_types.iter().any(|t| t == identifier) {
            return Ok(Some(QualifiedName::new(scope, identifier)));
        }

        let suffix = format!(".{}", identifier);
        if let Some(import) = context.imports.iter().find(|imp| imp.ends_with(&suffix)) {
            return Ok(Some(QualifiedName::split(import)));
        }

        if context.package_types.iter().any(|t| t == identifier) {
            let package = context.package.clone().unwrap_or_default();
            return Ok(Some(QualifiedName::new(package, identifier)));
        }

        if JAVA_LANG_CLASSES.contains(&identifier) {
            return Ok(Some(QualifiedName::new("java.lang", identifier)));
        }

        Ok(None)
    }
}
