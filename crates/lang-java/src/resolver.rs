use crate::descriptor::{self, BaseType, TypeDescriptor, with_array_suffix};
use crate::error::Result;
use crate::naming::{JavaNamingConvention, OBJECT_FQN};
use modfind_api::{DeclaringType, MethodParameters, MethodSymbol, TypeParameter, TypeScope};
use tracing::{debug, warn};

/// Bound chains longer than this (`A extends B`, `B extends C`, ...) are treated as unresolvable.
const MAX_BOUND_DEPTH: usize = 8;

/// One place where type parameters can be declared, together with the type whose
/// scope their bounds are written in.
struct TypeParameterLevel<'m> {
    context: &'m DeclaringType,
    parameters: &'m [TypeParameter],
}

/// Resolves method parameter signatures to fully qualified, erased type names.
pub struct SignatureResolver<S> {
    scope: S,
}

impl<S: TypeScope> SignatureResolver<S> {
    pub fn new(scope: S) -> Self {
        Self { scope }
    }

    /// Resolved parameter types of `method`, in declaration order.
    pub fn parameters(&self, method: &MethodSymbol) -> Result<Vec<String>> {
        match &method.parameters {
            MethodParameters::Binary(signature) => {
                // Compiled methods carry erased descriptors; no scope lookups needed.
                Ok(descriptor::parameter_signatures(signature)?
                    .into_iter()
                    .map(|p| TypeDescriptor::parse(p).render_unresolved())
                    .collect())
            }
            MethodParameters::Source(signatures) => signatures
                .iter()
                .map(|s| self.resolve_parameter(method, s))
                .collect(),
        }
    }

    fn resolve_parameter(&self, method: &MethodSymbol, signature: &str) -> Result<String> {
        let parsed = TypeDescriptor::parse(signature);
        let identifier = match &parsed.base {
            BaseType::Unresolved(identifier) | BaseType::TypeVariable(identifier) => identifier,
            _ => return Ok(parsed.render_unresolved()),
        };

        let base = match self.resolve_identifier(method, identifier)? {
            Some(resolved) => resolved,
            None => {
                warn!(
                    "Could not resolve parameter type '{}' of {}#{}; passing it through",
                    identifier, method.declaring_type.fqn, method.name
                );
                parsed.element.to_string()
            }
        };
        Ok(with_array_suffix(base, parsed.array_rank))
    }

    fn resolve_identifier(
        &self,
        method: &MethodSymbol,
        identifier: &str,
    ) -> Result<Option<String>> {
        if let Some(resolved) = self.resolve_type(&method.declaring_type, identifier)? {
            debug!(
                "Resolved '{}' through scope of {}",
                identifier, method.declaring_type.fqn
            );
            return Ok(Some(resolved));
        }

        let levels = Self::type_parameter_levels(method);
        self.resolve_type_parameter(&levels, 0, identifier, 0)
    }

    fn resolve_type(&self, context: &DeclaringType, identifier: &str) -> Result<Option<String>> {
        let erased = JavaNamingConvention::erasure(identifier);
        Ok(self
            .scope
            .resolve_simple_name(&context.fqn, &erased)?
            .map(|name| name.to_fqn()))
    }

    /// Method type parameters first, then the declaring type and each enclosing type outward.
    fn type_parameter_levels(method: &MethodSymbol) -> Vec<TypeParameterLevel<'_>> {
        let declaring = &method.declaring_type;
        std::iter::once(TypeParameterLevel {
            context: declaring,
            parameters: &method.type_parameters,
        })
        .chain(declaring.ancestry().map(|t| TypeParameterLevel {
            context: t,
            parameters: &t.type_parameters,
        }))
        .collect()
    }

    fn resolve_type_parameter(
        &self,
        levels: &[TypeParameterLevel<'_>],
        start: usize,
        identifier: &str,
        depth: usize,
    ) -> Result<Option<String>> {
        let found = levels.iter().enumerate().skip(start).find_map(|(i, level)| {
            level
                .parameters
                .iter()
                .find(|p| p.name == identifier)
                .map(|p| (i, level, p))
        });

        let Some((index, level, parameter)) = found else {
            return Ok(None);
        };

        let Some(bound) = parameter.bounds.first() else {
            return Ok(Some(OBJECT_FQN.to_string()));
        };

        if let Some(resolved) = self.resolve_type(level.context, bound)? {
            return Ok(Some(resolved));
        }

        // The bound may itself name a type parameter (`<T, U extends T>`).
        if depth >= MAX_BOUND_DEPTH {
            return Ok(None);
        }
        let erased = JavaNamingConvention::erasure(bound);
        self.resolve_type_parameter(levels, index, &erased, depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::{ImportTable, TypeContext};

    fn method(declaring: DeclaringType, params: &[&str]) -> MethodSymbol {
        MethodSymbol {
            declaring_type: declaring,
            name: "m".into(),
            is_constructor: false,
            parameters: MethodParameters::Source(params.iter().map(|s| s.to_string()).collect()),
            type_parameters: vec![],
        }
    }

    fn scope_for(types: &[&str]) -> ImportTable {
        let mut table = ImportTable::new();
        for t in types {
            table.insert(
                *t,
                TypeContext {
                    package: Some("com.acme".into()),
                    imports: vec!["java.util.List".into()],
                    ..Default::default()
                },
            );
        }
        table
    }

    #[test]
    fn test_unbounded_type_parameter_is_object() {
        let declaring = DeclaringType::new("com.acme.Box")
            .with_type_parameters(vec![TypeParameter::unbounded("T")]);
        let table = scope_for(&["com.acme.Box"]);
        let resolver = SignatureResolver::new(&table);

        let params = resolver.parameters(&method(declaring, &["QT;"])).unwrap();
        assert_eq!(params, vec!["java.lang.Object"]);
    }

    #[test]
    fn test_bound_chain_through_sibling_parameter() {
        let declaring = DeclaringType::new("com.acme.Box").with_type_parameters(vec![
            TypeParameter::bounded("T", "Number"),
            TypeParameter::bounded("U", "T"),
        ]);
        let table = scope_for(&["com.acme.Box"]);
        let resolver = SignatureResolver::new(&table);

        let params = resolver.parameters(&method(declaring, &["[QU;"])).unwrap();
        assert_eq!(params, vec!["java.lang.Number[]"]);
    }

    #[test]
    fn test_self_referential_bound_terminates() {
        let declaring = DeclaringType::new("com.acme.Box")
            .with_type_parameters(vec![TypeParameter::bounded("T", "T")]);
        let table = scope_for(&["com.acme.Box"]);
        let resolver = SignatureResolver::new(&table);

        let params = resolver.parameters(&method(declaring, &["QT;"])).unwrap();
        assert_eq!(params, vec!["QT;"]);
    }

    #[test]
    fn test_generic_bound_is_erased() {
        let declaring = DeclaringType::new("com.acme.Box")
            .with_type_parameters(vec![TypeParameter::bounded("T", "List<String>")]);
        let table = scope_for(&["com.acme.Box"]);
        let resolver = SignatureResolver::new(&table);

        let params = resolver.parameters(&method(declaring, &["QT;"])).unwrap();
        assert_eq!(params, vec!["java.util.List"]);
    }

    #[test]
    fn test_unresolved_generic_type_uses_erasure() {
        let table = scope_for(&["com.acme.Box"]);
        let resolver = SignatureResolver::new(&table);

        let params = resolver
            .parameters(&method(DeclaringType::new("com.acme.Box"), &["QList<QString;>;"]))
            .unwrap();
        assert_eq!(params, vec!["java.util.List"]);
    }

    #[test]
    fn test_missing_metadata_aborts() {
        let table = ImportTable::new();
        let resolver = SignatureResolver::new(&table);

        let result =
            resolver.parameters(&method(DeclaringType::new("com.acme.Box"), &["QString;"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_binary_signature_skips_scope() {
        // No scope entries at all: binary methods never consult the symbol model.
        let table = ImportTable::new();
        let resolver = SignatureResolver::new(&table);
        let mut m = method(DeclaringType::new("com.acme.Box"), &[]);
        m.parameters = MethodParameters::Binary("(Ljava/util/Map$Entry;[[JTT;)V".into());

        let params = resolver.parameters(&m).unwrap();
        assert_eq!(params, vec!["java.util.Map.Entry", "long[][]", "TT;"]);
    }
}
