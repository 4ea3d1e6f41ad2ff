/// Separator used between packages and between package/class in source names.
pub const TYPE_SEPARATOR: char = '.';

/// Package separator in JVM internal names (`java/lang/String`).
pub const INTERNAL_PACKAGE_SEPARATOR: char = '/';

/// Nested class separator in JVM binary names (`Map$Entry`).
pub const NESTED_SEPARATOR: char = '$';

/// Display name the method-pattern syntax uses for constructors.
pub const CONSTRUCTOR_NAME: &str = "<constructor>";

/// Type that an unbounded type parameter erases to.
pub const OBJECT_FQN: &str = "java.lang.Object";

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaNamingConvention;

impl JavaNamingConvention {
    /// Rewrite an internal or binary class name into its dotted source form.
    ///
    /// # Examples
    /// ```ignore
    /// to_source_name("java/util/Map$Entry") => "java.util.Map.Entry"
    /// ```
    pub fn to_source_name(name: &str) -> String {
        name.replace([INTERNAL_PACKAGE_SEPARATOR, NESTED_SEPARATOR], ".")
    }

    /// Strip type arguments from a type name: `Map<K, List<V>>.Entry` => `Map.Entry`.
    pub fn erasure(name: &str) -> String {
        let mut depth = 0usize;
        let mut erased = String::with_capacity(name.len());
        for c in name.chars() {
            match c {
                '<' => depth += 1,
                '>' => depth = depth.saturating_sub(1),
                _ if depth == 0 => erased.push(c),
                _ => {}
            }
        }
        erased.trim().to_string()
    }

    /// Java keyword for a JVM base-type descriptor character.
    pub fn primitive_keyword(descriptor: char) -> Option<&'static str> {
        match descriptor {
            'B' => Some("byte"),
            'C' => Some("char"),
            'D' => Some("double"),
            'F' => Some("float"),
            'I' => Some("int"),
            'J' => Some("long"),
            'S' => Some("short"),
            'Z' => Some("boolean"),
            'V' => Some("void"),
            _ => None,
        }
    }

    pub fn method_display_name(name: &str, is_constructor: bool) -> &str {
        if is_constructor { CONSTRUCTOR_NAME } else { name }
    }
}
