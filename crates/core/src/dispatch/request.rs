use crate::error::Result;
use modfind_api::SearchPattern;
use serde::Serialize;
use serde_json::{Map, Value};

pub const FIND_TYPES_RECIPE: &str = "org.openrewrite.java.search.FindTypes";
pub const FIND_METHODS_RECIPE: &str = "org.openrewrite.java.search.FindMethods";
pub const FIND_FIELDS_RECIPE: &str = "org.openrewrite.java.search.FindFields";

/// The `runRecipe` mutation for one search pattern.
pub fn run_recipe_mutation(pattern: &SearchPattern) -> String {
    match pattern {
        SearchPattern::Type {
            fully_qualified_type_name,
        } => run_recipe(
            FIND_TYPES_RECIPE,
            &[("fullyQualifiedTypeName", fully_qualified_type_name)],
        ),
        SearchPattern::Method { method_pattern } => {
            run_recipe(FIND_METHODS_RECIPE, &[("methodPattern", method_pattern)])
        }
        SearchPattern::Field {
            fully_qualified_type_name,
            field_name,
        } => run_recipe(
            FIND_FIELDS_RECIPE,
            &[
                ("fullyQualifiedTypeName", fully_qualified_type_name),
                ("fieldName", field_name),
            ],
        ),
    }
}

fn run_recipe(recipe: &str, options: &[(&str, &str)]) -> String {
    let options = options
        .iter()
        .map(|(name, value)| format!("{{name:\"{}\",value:\"{}\"}}", name, value))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "mutation {{runRecipe(run: {{recipe:{{id:\"{}\",options:[{}]}}}}) {{id}}}}",
        recipe, options
    )
}

/// GraphQL-over-HTTP envelope: `{"query":...,"variables":{},"operationName":null}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Map<String, Value>,
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
            operation_name: None,
        }
    }

    pub fn for_pattern(pattern: &SearchPattern) -> Self {
        Self::new(run_recipe_mutation(pattern))
    }

    /// Serialised body; quotes in the query come out as `\"`.
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_types_mutation() {
        let mutation = run_recipe_mutation(&SearchPattern::Type {
            fully_qualified_type_name: "com.acme.Foo".into(),
        });
        assert_eq!(
            mutation,
            r#"mutation {runRecipe(run: {recipe:{id:"org.openrewrite.java.search.FindTypes",options:[{name:"fullyQualifiedTypeName",value:"com.acme.Foo"}]}}) {id}}"#
        );
    }

    #[test]
    fn test_find_methods_mutation() {
        let mutation = run_recipe_mutation(&SearchPattern::Method {
            method_pattern: "com.acme.Foo bar(java.lang.String,int[])".into(),
        });
        assert_eq!(
            mutation,
            r#"mutation {runRecipe(run: {recipe:{id:"org.openrewrite.java.search.FindMethods",options:[{name:"methodPattern",value:"com.acme.Foo bar(java.lang.String,int[])"}]}}) {id}}"#
        );
    }

    #[test]
    fn test_find_fields_mutation() {
        let mutation = run_recipe_mutation(&SearchPattern::Field {
            fully_qualified_type_name: "com.acme.Foo".into(),
            field_name: "count".into(),
        });
        assert_eq!(
            mutation,
            r#"mutation {runRecipe(run: {recipe:{id:"org.openrewrite.java.search.FindFields",options:[{name:"fullyQualifiedTypeName",value:"com.acme.Foo"},{name:"fieldName",value:"count"}]}}) {id}}"#
        );
    }

    #[test]
    fn test_envelope_layout() {
        let body = GraphQlRequest::new(r#"mutation {a(b:"c")}"#).to_body().unwrap();
        assert_eq!(
            body,
            r#"{"query":"mutation {a(b:\"c\")}","variables":{},"operationName":null}"#
        );
    }

    #[test]
    fn test_envelope_parses_back_to_query() {
        let pattern = SearchPattern::Method {
            method_pattern: "com.acme.Foo <constructor>()".into(),
        };
        let request = GraphQlRequest::for_pattern(&pattern);
        let body = request.to_body().unwrap();

        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["query"], Value::String(request.query.clone()));
        assert_eq!(parsed["variables"], serde_json::json!({}));
        assert!(parsed["operationName"].is_null());
    }
}
