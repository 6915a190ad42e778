//! Walks requested fields against the entity store.
//!
//! Only requested attributes are projected and a relationship is traversed only
//! when it is part of the selection. Anything that cannot be resolved is left out
//! of the output and recorded as a [`GraphqlError`], which the caller may or may
//! not report.

mod fields;
mod item;
mod owner;

use fields::{Field, Projection};

use crate::{
    request::{Invocation, RootField, Selection, SelectionSet},
    response::{ErrorCode, ErrorPath, GraphqlError, ResponseValue},
    store::EntityStore,
};

/// Resolves the invocations of one request.
pub struct Resolver<'a> {
    store: &'a EntityStore,
    errors: Vec<GraphqlError>,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Resolver {
            store,
            errors: Vec::new(),
        }
    }

    /// The value of `invocation`, or `None` when it contributes nothing to the
    /// response.
    pub fn resolve(&mut self, invocation: &Invocation) -> Option<ResponseValue> {
        let path = ErrorPath::from(invocation.response_key());

        let Some(kind) = invocation.kind() else {
            tracing::debug!(field = invocation.field_name(), "unknown root field, omitted");

            self.errors.push(
                GraphqlError::new(
                    format!("unknown root field `{}`", invocation.field_name()),
                    ErrorCode::UnknownField,
                )
                .with_location(invocation.location())
                .with_path(path),
            );

            return None;
        };

        match kind {
            RootField::ItemById => {
                let id = self.lookup_id(invocation, &path)?;
                self.item_by_id(id, invocation.selection(), &path)
            }
            RootField::AllItems => Some(self.all_items(invocation.selection_set(), &path)),
            RootField::OwnerById => {
                let id = self.lookup_id(invocation, &path)?;
                self.owner_by_id(id, invocation.selection(), &path)
            }
        }
    }

    /// Everything that was left out so far.
    pub fn into_errors(self) -> Vec<GraphqlError> {
        self.errors
    }

    fn lookup_id<'i>(&mut self, invocation: &'i Invocation, path: &ErrorPath) -> Option<&'i str> {
        let name = invocation.kind().and_then(RootField::lookup_argument)?;

        let Some(argument) = invocation.argument(name) else {
            tracing::debug!(
                field = invocation.field_name(),
                argument = name,
                "missing lookup argument, omitted"
            );

            self.errors.push(
                GraphqlError::new(
                    format!("field `{}` requires an `{name}` argument", invocation.field_name()),
                    ErrorCode::MissingArgument,
                )
                .with_location(invocation.location())
                .with_path(path.clone()),
            );

            return None;
        };

        if argument.value().is_none() {
            tracing::debug!(
                field = invocation.field_name(),
                argument = name,
                "unreadable lookup argument, omitted"
            );

            self.errors.push(
                GraphqlError::new(
                    format!("nothing matches the malformed `{name}` argument of `{}`", invocation.field_name()),
                    ErrorCode::NotFound,
                )
                .with_location(argument.location())
                .with_path(path.clone()),
            );
        }

        argument.value()
    }

    fn not_found(&mut self, entity: &str, id: &str, selection: &Selection, path: &ErrorPath) {
        tracing::debug!(entity, id, "no match for lookup, omitted");

        self.errors.push(
            GraphqlError::new(format!("no {entity} with id `{id}`"), ErrorCode::NotFound)
                .with_location(selection.location())
                .with_path(path.clone()),
        );
    }

    /// Splits `selection_set` by the fields of `F`, reporting the ones `F` doesn't have.
    fn projection<'s, F: Field>(&mut self, selection_set: &'s SelectionSet, path: &ErrorPath) -> Projection<'s, F> {
        let projection = Projection::new(selection_set);

        for selection in projection.unknown() {
            tracing::debug!(
                field = selection.name(),
                type_name = F::TYPE_NAME,
                "unknown field, omitted"
            );

            self.errors.push(
                GraphqlError::new(
                    format!("unknown field `{}` on {}", selection.name(), F::TYPE_NAME),
                    ErrorCode::UnknownField,
                )
                .with_location(selection.location())
                .with_path(path.child(selection.response_key())),
            );
        }

        projection
    }
}

/// Resolves a single invocation, discarding the reason when it yields nothing.
pub fn resolve(invocation: &Invocation, store: &EntityStore) -> Option<(String, ResponseValue)> {
    Resolver::new(store)
        .resolve(invocation)
        .map(|value| (invocation.response_key().to_string(), value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::request::ParsedRequest;

    fn resolve_all(request: &str) -> (serde_json::Value, Vec<GraphqlError>) {
        let store = EntityStore::demo();
        let parsed = ParsedRequest::parse(request);
        let mut resolver = Resolver::new(&store);

        let mut data = serde_json::Map::new();
        for invocation in parsed.invocations() {
            if let Some(value) = resolver.resolve(invocation) {
                data.insert(invocation.response_key().to_string(), serde_json::to_value(value).unwrap());
            }
        }

        (serde_json::Value::Object(data), resolver.into_errors())
    }

    #[test]
    fn single_item_projection() {
        let store = EntityStore::demo();
        let parsed = ParsedRequest::parse(r#"{ coffee(id: "coffee1") { name price } }"#);

        let (key, value) = resolve(&parsed.invocations()[0], &store).unwrap();

        assert_eq!("coffee", key);
        assert_eq!(
            json!({ "name": "Latte", "price": 3.99 }),
            serde_json::to_value(value).unwrap()
        );
    }

    #[test]
    fn unknown_root_field_yields_nothing() {
        let (data, errors) = resolve_all(r#"{ menu { name } coffee(id: "coffee2") { name } }"#);

        assert_eq!(json!({ "coffee": { "name": "Espresso" } }), data);
        assert_eq!(1, errors.len());
        assert_eq!(ErrorCode::UnknownField, errors[0].code);
        assert_eq!("unknown root field `menu`", errors[0].message);
    }

    #[test]
    fn missing_argument_yields_nothing() {
        let (data, errors) = resolve_all("{ item { name } customer { name } }");

        assert_eq!(json!({}), data);
        assert_eq!(
            vec![ErrorCode::MissingArgument, ErrorCode::MissingArgument],
            errors.iter().map(|error| error.code).collect::<Vec<_>>()
        );
        assert_eq!("field `item` requires an `id` argument", errors[0].message);
    }

    #[test]
    fn malformed_argument_is_a_lookup_miss() {
        let (data, errors) = resolve_all(r#"{ item(id: ) { name } coffee(id: "coffee3") { name } }"#);

        assert_eq!(json!({ "coffee": { "name": "Cappuccino" } }), data);
        assert_eq!(1, errors.len());
        assert_eq!(ErrorCode::NotFound, errors[0].code);
    }

    #[test]
    fn unknown_sub_fields_are_left_out() {
        let (data, errors) = resolve_all(r#"{ item(id: "coffee1") { name flavor } }"#);

        assert_eq!(json!({ "item": { "name": "Latte" } }), data);
        assert_eq!("unknown field `flavor` on Item", errors[0].message);
        assert_eq!(Some(ErrorPath::from("item").child("flavor")), errors[0].path);
    }

    #[test]
    fn unknown_fields_of_a_list_are_reported_once() {
        let (data, errors) = resolve_all("{ allCoffees { flavor } }");

        assert_eq!(json!({ "allCoffees": [{}, {}, {}] }), data);
        assert_eq!(1, errors.len());
    }

    #[test]
    fn no_relationship_scan_unless_requested() {
        let store = EntityStore::demo();
        let parsed = ParsedRequest::parse(r#"{ customer(id: "cust1") { name email } }"#);

        let (_, value) = resolve(&parsed.invocations()[0], &store).unwrap();

        assert_eq!(
            json!({ "name": "Alice", "email": "alice@example.com" }),
            serde_json::to_value(value).unwrap()
        );
        assert_eq!(0, store.stats().relationship_scans);
    }
}
