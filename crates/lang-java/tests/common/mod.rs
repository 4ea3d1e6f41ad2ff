use modfind_api::{CodeSymbol, DeclaringType, MethodParameters, MethodSymbol, TypeParameter};
use modfind_java::scope::{ImportTable, TypeContext};

/// Scope for `com.acme.Foo` and `com.acme.Box`, both importing `java.util.List`.
#[allow(dead_code)]
pub fn acme_scope() -> ImportTable {
    let context = TypeContext {
        package: Some("com.acme".into()),
        imports: vec!["java.util.List".into(), "com.acme.model.Widget".into()],
        member_types: vec![],
        package_types: vec!["Foo".into(), "Box".into()],
    };
    ImportTable::new()
        .with_type("com.acme.Foo", context.clone())
        .with_type("com.acme.Box", context.clone())
        .with_type("com.acme.Outer", context.clone())
        .with_type("com.acme.Outer.Inner", context)
}

#[allow(dead_code)]
pub fn source_method(declaring: DeclaringType, name: &str, params: &[&str]) -> MethodSymbol {
    MethodSymbol {
        declaring_type: declaring,
        name: name.to_string(),
        is_constructor: false,
        parameters: MethodParameters::Source(params.iter().map(|p| p.to_string()).collect()),
        type_parameters: Vec::<TypeParameter>::new(),
    }
}

#[allow(dead_code)]
pub fn method_symbol(method: MethodSymbol) -> CodeSymbol {
    CodeSymbol::Method(method)
}
