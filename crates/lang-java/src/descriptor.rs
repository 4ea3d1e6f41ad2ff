//! Parsing of JVM/JDT type signatures as they appear in method parameter lists.
//!
//! Three families are understood:
//! - resolved class types `Ljava/lang/String;` (internal or dotted names, `$` for nesting),
//! - unresolved source types `QString;` that still need a scope lookup,
//! - type variables `TT;` and the single-character base types (`I`, `Z`, ...).
//!
//! Array markers are always flattened: `[[QT;` is rank 2 over `QT;`.

use crate::error::{PatternError, Result};
use crate::naming::JavaNamingConvention;

pub const C_ARRAY: char = '[';
pub const C_RESOLVED: char = 'L';
pub const C_UNRESOLVED: char = 'Q';
pub const C_TYPE_VARIABLE: char = 'T';
pub const C_NAME_END: char = ';';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    Primitive(&'static str),
    /// Dotted source name of an already-resolved class.
    Class(String),
    /// Identifier of an unresolved source type, type arguments included (`List<QString;>`).
    Unresolved(String),
    TypeVariable(String),
    /// Anything else; rendered verbatim.
    Verbatim(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor<'a> {
    /// Signature text with the array markers removed.
    pub element: &'a str,
    pub array_rank: usize,
    pub base: BaseType,
}

impl<'a> TypeDescriptor<'a> {
    pub fn parse(signature: &'a str) -> Self {
        let element = signature.trim_start_matches(C_ARRAY);
        let array_rank = signature.len() - element.len();
        Self {
            element,
            array_rank,
            base: parse_base(element),
        }
    }

    /// Render without any scope lookups: resolved and primitive types are normalised,
    /// everything else passes through as written.
    pub fn render_unresolved(&self) -> String {
        let base = match &self.base {
            BaseType::Primitive(keyword) => keyword.to_string(),
            BaseType::Class(name) => name.clone(),
            BaseType::Unresolved(_) | BaseType::TypeVariable(_) | BaseType::Verbatim(_) => {
                self.element.to_string()
            }
        };
        with_array_suffix(base, self.array_rank)
    }
}

/// Append one `[]` per array dimension.
pub fn with_array_suffix(mut base: String, rank: usize) -> String {
    for _ in 0..rank {
        base.push_str("[]");
    }
    base
}

fn parse_base(element: &str) -> BaseType {
    let mut chars = element.chars();
    let Some(kind) = chars.next() else {
        return BaseType::Verbatim(String::new());
    };

    if chars.as_str().is_empty() {
        if let Some(keyword) = JavaNamingConvention::primitive_keyword(kind) {
            return BaseType::Primitive(keyword);
        }
    }

    let Some(body) = chars.as_str().strip_suffix(C_NAME_END) else {
        return BaseType::Verbatim(element.to_string());
    };

    match kind {
        C_RESOLVED => BaseType::Class(JavaNamingConvention::to_source_name(
            &JavaNamingConvention::erasure(body),
        )),
        C_UNRESOLVED => BaseType::Unresolved(body.to_string()),
        C_TYPE_VARIABLE => BaseType::TypeVariable(body.to_string()),
        _ => BaseType::Verbatim(element.to_string()),
    }
}

/// Cut the parameter descriptors out of a method signature such as
/// `<T:Ljava/lang/Object;>(Ljava/lang/String;[ITT;)V`.
pub fn parameter_signatures(method_signature: &str) -> Result<Vec<&str>> {
    let malformed = || PatternError::MalformedSignature(method_signature.to_string());

    let mut rest = method_signature;
    if rest.starts_with('<') {
        let close = matching_angle(rest).ok_or_else(malformed)?;
        rest = &rest[close + 1..];
    }
    let rest = rest.strip_prefix('(').ok_or_else(malformed)?;
    let close = rest.rfind(')').ok_or_else(malformed)?;
    split_parameters(&rest[..close]).ok_or_else(malformed)
}

/// Split a concatenated descriptor list (`Ljava/lang/String;[II`) into single descriptors.
fn split_parameters(params: &str) -> Option<Vec<&str>> {
    let bytes = params.as_bytes();
    let mut result = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && bytes[i] == b'[' {
            i += 1;
        }
        match *bytes.get(i)? {
            b'L' | b'Q' | b'T' => {
                let mut depth = 0usize;
                loop {
                    i += 1;
                    match *bytes.get(i)? {
                        b'<' => depth += 1,
                        b'>' => depth = depth.checked_sub(1)?,
                        b';' if depth == 0 => break,
                        _ => {}
                    }
                }
            }
            c if JavaNamingConvention::primitive_keyword(c as char).is_some() => {}
            _ => return None,
        }
        i += 1;
        result.push(&params[start..i]);
        start = i;
    }

    Some(result)
}

fn matching_angle(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolved_class() {
        let d = TypeDescriptor::parse("Ljava/util/Map$Entry;");
        assert_eq!(d.array_rank, 0);
        assert_eq!(d.base, BaseType::Class("java.util.Map.Entry".into()));
        assert_eq!(d.render_unresolved(), "java.util.Map.Entry");
    }

    #[test]
    fn test_parse_resolved_generic_class_is_erased() {
        let d = TypeDescriptor::parse("Ljava/util/List<Ljava/lang/String;>;");
        assert_eq!(d.base, BaseType::Class("java.util.List".into()));
    }

    #[test]
    fn test_array_rank_is_flattened() {
        let d = TypeDescriptor::parse("[[[QT;");
        assert_eq!(d.array_rank, 3);
        assert_eq!(d.element, "QT;");
        assert_eq!(d.base, BaseType::Unresolved("T".into()));
        assert_eq!(d.render_unresolved(), "QT;[][][]");
    }

    #[test]
    fn test_primitives() {
        assert_eq!(TypeDescriptor::parse("[I").render_unresolved(), "int[]");
        assert_eq!(TypeDescriptor::parse("J").render_unresolved(), "long");
    }

    #[test]
    fn test_unknown_text_is_verbatim() {
        let d = TypeDescriptor::parse("java.lang.String");
        assert_eq!(d.base, BaseType::Verbatim("java.lang.String".into()));
        assert_eq!(d.render_unresolved(), "java.lang.String");
    }

    #[test]
    fn test_parameter_signatures() {
        let params = parameter_signatures("(Ljava/lang/String;[IJ[[Ljava/util/List;)V").unwrap();
        assert_eq!(
            params,
            vec!["Ljava/lang/String;", "[I", "J", "[[Ljava/util/List;"]
        );
    }

    #[test]
    fn test_parameter_signatures_with_generics() {
        let params =
            parameter_signatures("<T:Ljava/lang/Object;>(Ljava/util/List<TT;>;TT;)V").unwrap();
        assert_eq!(params, vec!["Ljava/util/List<TT;>;", "TT;"]);
    }

    #[test]
    fn test_parameter_signatures_empty() {
        assert!(parameter_signatures("()V").unwrap().is_empty());
    }

    #[test]
    fn test_parameter_signatures_malformed() {
        assert!(parameter_signatures("Ljava/lang/String;").is_err());
        assert!(parameter_signatures("(Ljava/lang/String)V").is_err());
    }
}
