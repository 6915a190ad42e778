use super::{
    fields::{GroupingField, OwnerField, Projection},
    Resolver,
};
use crate::{
    request::{Selection, SelectionSet},
    response::{ErrorPath, ResponseObject, ResponseValue},
    store::{Grouping, Owner},
};

impl Resolver<'_> {
    pub(super) fn owner_by_id(&mut self, id: &str, selection: &Selection, path: &ErrorPath) -> Option<ResponseValue> {
        let store = self.store;

        let Some(owner) = store.owner(id) else {
            self.not_found("owner", id, selection, path);
            return None;
        };

        tracing::debug!(id, "resolving owner");

        Some(self.owner_object(owner, selection.sub_fields(), path).into())
    }

    fn owner_object(&mut self, owner: &Owner, selection_set: &SelectionSet, path: &ErrorPath) -> ResponseObject {
        let projection = self.projection::<OwnerField>(selection_set, path);
        let mut object = ResponseObject::with_capacity(projection.len());

        for (field, selection) in projection.fields() {
            let value = match field {
                OwnerField::Id => owner.id.as_str().into(),
                OwnerField::Name => owner.name.as_str().into(),
                OwnerField::Email => owner.email.as_str().into(),
                OwnerField::Groupings => {
                    self.owner_groupings(owner, selection.sub_fields(), &path.child(selection.response_key()))
                }
            };

            object.insert(selection.response_key(), value);
        }

        object
    }

    /// Groupings referencing a missing owner or item are skipped.
    fn owner_groupings(&mut self, owner: &Owner, selection_set: &SelectionSet, path: &ErrorPath) -> ResponseValue {
        let store = self.store;
        let groupings = store.find_groupings_by_owner(&owner.id);

        tracing::debug!(owner = %owner.id, count = groupings.len(), "resolving groupings");

        let projection = self.projection::<GroupingField>(selection_set, path);

        groupings
            .into_iter()
            .filter(|grouping| {
                let traversable = store.is_traversable(grouping);

                if !traversable {
                    tracing::debug!(grouping = %grouping.id, "grouping has a dangling reference, skipped");
                }

                traversable
            })
            .enumerate()
            .map(|(index, grouping)| ResponseValue::from(self.grouping_object(grouping, &projection, &path.index(index))))
            .collect::<Vec<_>>()
            .into()
    }

    fn grouping_object(
        &mut self,
        grouping: &Grouping,
        projection: &Projection<'_, GroupingField>,
        path: &ErrorPath,
    ) -> ResponseObject {
        let store = self.store;
        let mut object = ResponseObject::with_capacity(projection.len());

        for (field, selection) in projection.fields() {
            let value = match field {
                GroupingField::Id => grouping.id.as_str().into(),
                GroupingField::Items => self.referenced_items(
                    &grouping.item_ids,
                    selection.sub_fields(),
                    &path.child(selection.response_key()),
                ),
                GroupingField::TotalAmount => grouping
                    .item_ids
                    .iter()
                    .filter_map(|id| store.item(id))
                    .fold(0.0, |total, item| total + item.price)
                    .into(),
            };

            object.insert(selection.response_key(), value);
        }

        object
    }
}
