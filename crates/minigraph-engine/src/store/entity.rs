/// A purchasable item, the "coffee" of the demo data.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub origin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// An ordered group of items belonging to an owner, the "order" of the demo data.
///
/// Relationships are stored as foreign keys. `item_ids` may repeat an item, the
/// order is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grouping {
    pub id: String,
    pub owner_id: String,
    pub item_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Item,
    Owner,
    Grouping,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entity<'a> {
    Item(&'a Item),
    Owner(&'a Owner),
    Grouping(&'a Grouping),
}

impl<'a> Entity<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Entity::Item(item) => &item.id,
            Entity::Owner(owner) => &owner.id,
            Entity::Grouping(grouping) => &grouping.id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Item(_) => EntityKind::Item,
            Entity::Owner(_) => EntityKind::Owner,
            Entity::Grouping(_) => EntityKind::Grouping,
        }
    }
}

impl<'a> From<&'a Item> for Entity<'a> {
    fn from(item: &'a Item) -> Self {
        Entity::Item(item)
    }
}

impl<'a> From<&'a Owner> for Entity<'a> {
    fn from(owner: &'a Owner) -> Self {
        Entity::Owner(owner)
    }
}

impl<'a> From<&'a Grouping> for Entity<'a> {
    fn from(grouping: &'a Grouping) -> Self {
        Entity::Grouping(grouping)
    }
}
