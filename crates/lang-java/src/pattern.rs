use crate::error::Result;
use crate::naming::JavaNamingConvention;
use crate::resolver::SignatureResolver;
use modfind_api::{CodeSymbol, MethodSymbol, SearchPattern, TypeScope};

/// Turns a selected symbol into the recipe options that identify it.
pub struct PatternBuilder<S> {
    resolver: SignatureResolver<S>,
}

impl<S: TypeScope> PatternBuilder<S> {
    pub fn new(scope: S) -> Self {
        Self {
            resolver: SignatureResolver::new(scope),
        }
    }

    pub fn build(&self, symbol: &CodeSymbol) -> Result<SearchPattern> {
        match symbol {
            CodeSymbol::Type(t) => Ok(SearchPattern::Type {
                fully_qualified_type_name: t.fqn.clone(),
            }),
            CodeSymbol::Method(m) => Ok(SearchPattern::Method {
                method_pattern: self.method_pattern(m)?,
            }),
            CodeSymbol::Field(f) => Ok(SearchPattern::Field {
                fully_qualified_type_name: f.declaring_type.clone(),
                field_name: f.name.clone(),
            }),
        }
    }

    /// `com.acme.Foo bar(java.lang.String,int[])`
    pub fn method_pattern(&self, method: &MethodSymbol) -> Result<String> {
        let params = self.resolver.parameters(method)?.join(",");
        let name = JavaNamingConvention::method_display_name(&method.name, method.is_constructor);
        Ok(format!("{} {}({})", method.declaring_type.fqn, name, params))
    }
}
