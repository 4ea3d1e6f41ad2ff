use modfind_api::CodeSymbol;
use modfind_java::ImportTable;
use serde::Deserialize;
use std::path::Path;

/// A selected symbol plus what its declaring types can see, as exported by an editor.
///
/// ```json
/// {
///   "symbol": { "kind": "type", "fqn": "com.acme.Foo" },
///   "scope": { "com.acme.Foo": { "package": "com.acme", "imports": ["java.util.List"] } }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolFile {
    pub symbol: CodeSymbol,
    #[serde(default)]
    pub scope: ImportTable,
}

impl SymbolFile {
    pub fn read(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modfind_api::SymbolKind;

    #[test]
    fn test_read_method_with_scope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbol.json");
        std::fs::write(
            &path,
            r#"{
                "symbol": {
                    "kind": "method",
                    "declaring_type": { "fqn": "com.acme.Foo" },
                    "name": "bar",
                    "parameters": { "source": ["QList;"] }
                },
                "scope": {
                    "com.acme.Foo": { "package": "com.acme", "imports": ["java.util.List"] }
                }
            }"#,
        )
        .unwrap();

        let file = SymbolFile::read(&path).unwrap();
        assert_eq!(file.symbol.kind(), SymbolKind::Method);
        assert_eq!(
            file.scope.get("com.acme.Foo").unwrap().imports,
            vec!["java.util.List"]
        );
    }

    #[test]
    fn test_scope_is_optional() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbol.json");
        std::fs::write(&path, r#"{ "symbol": { "kind": "type", "fqn": "com.acme.Foo" } }"#).unwrap();

        let file = SymbolFile::read(&path).unwrap();
        assert!(file.scope.is_empty());
    }
}
