use super::{
    fields::{ItemField, Projection},
    Resolver,
};
use crate::{
    request::{Selection, SelectionSet},
    response::{ErrorPath, ResponseObject, ResponseValue},
    store::Item,
};

impl Resolver<'_> {
    pub(super) fn item_by_id(&mut self, id: &str, selection: &Selection, path: &ErrorPath) -> Option<ResponseValue> {
        let store = self.store;

        let Some(item) = store.item(id) else {
            self.not_found("item", id, selection, path);
            return None;
        };

        tracing::debug!(id, "resolving item");

        let projection = self.projection::<ItemField>(selection.sub_fields(), path);

        Some(item_object(item, &projection).into())
    }

    pub(super) fn all_items(&mut self, selection_set: &SelectionSet, path: &ErrorPath) -> ResponseValue {
        let store = self.store;
        let items = store.items();

        tracing::debug!(count = items.len(), "resolving all items");

        let projection = self.projection::<ItemField>(selection_set, path);

        items
            .map(|item| ResponseValue::from(item_object(item, &projection)))
            .collect::<Vec<_>>()
            .into()
    }

    /// Projects the items referenced by `item_ids`, in order and with repetitions.
    pub(super) fn referenced_items(
        &mut self,
        item_ids: &[String],
        selection_set: &SelectionSet,
        path: &ErrorPath,
    ) -> ResponseValue {
        let store = self.store;
        let projection = self.projection::<ItemField>(selection_set, path);

        item_ids
            .iter()
            .filter_map(|id| store.item(id))
            .map(|item| ResponseValue::from(item_object(item, &projection)))
            .collect::<Vec<_>>()
            .into()
    }
}

fn item_object(item: &Item, projection: &Projection<'_, ItemField>) -> ResponseObject {
    projection
        .fields()
        .map(|(field, selection)| {
            let value = match field {
                ItemField::Id => ResponseValue::from(item.id.as_str()),
                ItemField::Name => item.name.as_str().into(),
                ItemField::Price => item.price.into(),
                ItemField::Origin => item.origin.as_str().into(),
            };

            (selection.response_key(), value)
        })
        .collect()
}
