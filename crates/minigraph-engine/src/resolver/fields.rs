use std::str::FromStr;

use itertools::{Either, Itertools};

use crate::request::{Selection, SelectionSet};

/// A field exposed by an entity. The variant order is the declared attribute
/// order, which is also the output order.
pub(super) trait Field: FromStr + Ord + Copy {
    const TYPE_NAME: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::EnumString)]
#[strum(serialize_all = "camelCase")]
pub(super) enum ItemField {
    Id,
    Name,
    Price,
    Origin,
}

impl Field for ItemField {
    const TYPE_NAME: &'static str = "Item";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::EnumString)]
#[strum(serialize_all = "camelCase")]
pub(super) enum OwnerField {
    Id,
    Name,
    Email,
    #[strum(serialize = "groupings", serialize = "orders")]
    Groupings,
}

impl Field for OwnerField {
    const TYPE_NAME: &'static str = "Owner";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::EnumString)]
#[strum(serialize_all = "camelCase")]
pub(super) enum GroupingField {
    Id,
    Items,
    TotalAmount,
}

impl Field for GroupingField {
    const TYPE_NAME: &'static str = "Grouping";
}

/// The requested fields of one selection set that exist on `F`, in declared
/// order. Fields requested several times (under different aliases) keep their
/// request order among themselves.
pub(super) struct Projection<'s, F> {
    fields: Vec<(F, &'s Selection)>,
    unknown: Vec<&'s Selection>,
}

impl<'s, F: Field> Projection<'s, F> {
    pub(super) fn new(selection_set: &'s SelectionSet) -> Self {
        let (mut fields, unknown): (Vec<_>, Vec<_>) =
            selection_set
                .iter()
                .partition_map(|selection| match selection.name().parse::<F>() {
                    Ok(field) => Either::Left((field, selection)),
                    Err(_) => Either::Right(selection),
                });

        fields.sort_by_key(|(field, _)| *field);

        Projection { fields, unknown }
    }

    pub(super) fn fields(&self) -> impl Iterator<Item = (F, &'s Selection)> + '_ {
        self.fields.iter().copied()
    }

    pub(super) fn unknown(&self) -> &[&'s Selection] {
        &self.unknown
    }

    pub(super) fn len(&self) -> usize {
        self.fields.len()
    }
}
