/// The fields a request may start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum RootField {
    /// One item looked up by `id`.
    ItemById,
    /// Every item, in store order.
    AllItems,
    /// One owner looked up by `id`, with its groupings and their items on demand.
    OwnerById,
}

impl RootField {
    const FIELD_NAMES: &'static [(&'static str, RootField)] = &[
        ("item", RootField::ItemById),
        ("coffee", RootField::ItemById),
        ("allItems", RootField::AllItems),
        ("allCoffees", RootField::AllItems),
        ("owner", RootField::OwnerById),
        ("customer", RootField::OwnerById),
    ];

    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::FIELD_NAMES
            .iter()
            .find(|(field_name, _)| *field_name == name)
            .map(|(_, kind)| *kind)
    }

    /// Every field name resolving to this kind.
    pub fn field_names(self) -> impl Iterator<Item = &'static str> {
        Self::FIELD_NAMES
            .iter()
            .filter(move |(_, kind)| *kind == self)
            .map(|(name, _)| *name)
    }

    /// Name of the argument this kind requires, if any.
    pub fn lookup_argument(self) -> Option<&'static str> {
        match self {
            RootField::ItemById | RootField::OwnerById => Some("id"),
            RootField::AllItems => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn field_names_resolve_back_to_their_kind() {
        for kind in RootField::iter() {
            assert!(kind.field_names().count() > 0, "{kind} has no field name");

            for name in kind.field_names() {
                assert_eq!(Some(kind), RootField::from_field_name(name));
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(None, RootField::from_field_name("Item"));
        assert_eq!(None, RootField::from_field_name("allitems"));
        assert_eq!(None, RootField::from_field_name("items"));
    }
}
