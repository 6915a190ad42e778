use std::sync::Arc;

use minigraph_config::{EngineConfig, ErrorMode};

use crate::{
    request::ParsedRequest,
    resolver::Resolver,
    response::{ErrorCode, GraphqlError, Response, ResponseAssembler},
    store::EntityStore,
};

/// Executes requests against a shared, read-only entity store.
///
/// An engine is cheap to clone and can be used from several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    store: Arc<EntityStore>,
    config: EngineConfig,
}

impl Engine {
    pub fn new(store: impl Into<Arc<EntityStore>>, config: EngineConfig) -> Self {
        Engine {
            store: store.into(),
            config,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn error_mode(&self) -> ErrorMode {
        self.config.error_mode
    }

    /// Parses, resolves and assembles one request.
    ///
    /// This never fails: whatever cannot be resolved is left out of `data`. In
    /// strict mode every omission is also reported in `errors`.
    pub fn execute(&self, request: &str) -> Response {
        let span = tracing::info_span!("execute", strict = self.config.error_mode.is_strict());
        let _guard = span.enter();

        let parsed = ParsedRequest::parse(request);

        let mut errors = parsed
            .diagnostics()
            .iter()
            .map(|diagnostic| {
                tracing::debug!(%diagnostic, "syntax error in request");
                GraphqlError::new(diagnostic.message.clone(), ErrorCode::SyntaxError).with_location(diagnostic.location)
            })
            .collect::<Vec<_>>();

        let mut resolver = Resolver::new(&self.store);
        let mut assembler = ResponseAssembler::new();

        for invocation in parsed.invocations() {
            if let Some(value) = resolver.resolve(invocation) {
                assembler.insert(invocation.response_key(), value);
            }
        }

        errors.extend(resolver.into_errors());

        if self.config.error_mode.is_strict() {
            assembler.push_errors(errors);
        } else if !errors.is_empty() {
            tracing::debug!(omissions = errors.len(), "omissions left unreported in lenient mode");
        }

        let response = assembler.finish();

        tracing::info!(
            invocations = parsed.invocations().len(),
            resolved = response.data.len(),
            errors = response.errors.len(),
            "request executed"
        );

        response
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use serde_json::json;

    use super::*;

    fn engine(error_mode: ErrorMode) -> Engine {
        Engine::new(EntityStore::demo(), EngineConfig { error_mode })
    }

    #[test]
    fn lenient_mode_only_returns_data() {
        let response = engine(ErrorMode::Lenient).execute(r#"{ coffee(id: "nope") { name } menu }"#);

        assert_eq!(json!({ "data": {} }), serde_json::to_value(&response).unwrap());
    }

    #[test]
    fn strict_mode_reports_each_omission() {
        let request = indoc! {r#"
            {
              coffee(id: "nope") { name }
              menu
              customer(id: "cust2") { name phone }
            }
        "#};

        let response = engine(ErrorMode::Strict).execute(request);

        assert_eq!(json!({ "customer": { "name": "Bob" } }), serde_json::to_value(&response.data).unwrap());
        assert_eq!(
            vec![ErrorCode::NotFound, ErrorCode::UnknownField, ErrorCode::UnknownField],
            response.errors.iter().map(|error| error.code).collect::<Vec<_>>()
        );
        assert_eq!(
            json!({
                "message": "no item with id `nope`",
                "locations": [{ "line": 2, "column": 3 }],
                "path": ["coffee"],
                "extensions": { "code": "NOT_FOUND" }
            }),
            serde_json::to_value(&response.errors[0]).unwrap()
        );
    }

    #[test]
    fn syntax_errors_come_first() {
        let response = engine(ErrorMode::Strict).execute(r#"{ coffee(id: "coffee1" { name } bad: }"#);

        assert_eq!(ErrorCode::SyntaxError, response.errors[0].code);
        assert_eq!(json!({ "coffee": { "name": "Latte" } }), serde_json::to_value(&response.data).unwrap());
    }
}
