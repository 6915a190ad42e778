mod dataset;
mod entity;
mod stats;

use indexmap::IndexMap;

pub use dataset::{Dataset, DatasetError};
pub use entity::{Entity, EntityKind, Grouping, Item, Owner};
pub use stats::StatsSnapshot;

use stats::StoreStats;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate {kind} identifier `{id}`")]
    DuplicateId { kind: EntityKind, id: String },
    #[error("item `{id}` has an invalid price {price}, prices must be finite and non-negative")]
    InvalidPrice { id: String, price: f64 },
}

/// Read-only collections of items, owners and groupings keyed by identifier.
///
/// Collections keep insertion order, which is the iteration order of every
/// listing. Relationships are foreign keys: a grouping references its owner and
/// items by identifier and nothing guarantees they exist, see
/// [`EntityStore::is_traversable`].
#[derive(Debug, Default)]
pub struct EntityStore {
    items: IndexMap<String, Item>,
    owners: IndexMap<String, Owner>,
    groupings: IndexMap<String, Grouping>,
    stats: StoreStats,
}

impl EntityStore {
    pub fn new(dataset: Dataset) -> Result<Self, StoreError> {
        let Dataset {
            items,
            owners,
            groupings,
        } = dataset;

        for item in &items {
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(StoreError::InvalidPrice {
                    id: item.id.clone(),
                    price: item.price,
                });
            }
        }

        let store = EntityStore {
            items: index(EntityKind::Item, items, |item| &item.id)?,
            owners: index(EntityKind::Owner, owners, |owner| &owner.id)?,
            groupings: index(EntityKind::Grouping, groupings, |grouping| &grouping.id)?,
            stats: StoreStats::default(),
        };

        tracing::debug!(
            items = store.items.len(),
            owners = store.owners.len(),
            groupings = store.groupings.len(),
            "entity store initialized"
        );

        Ok(store)
    }

    /// A store seeded with [`Dataset::demo`].
    pub fn demo() -> Self {
        Self::new(Dataset::demo()).expect("demo dataset must be valid")
    }

    pub fn get(&self, kind: EntityKind, id: &str) -> Option<Entity<'_>> {
        match kind {
            EntityKind::Item => self.item(id).map(Entity::from),
            EntityKind::Owner => self.owner(id).map(Entity::from),
            EntityKind::Grouping => self.grouping(id).map(Entity::from),
        }
    }

    pub fn list_all(&self, kind: EntityKind) -> Vec<Entity<'_>> {
        match kind {
            EntityKind::Item => self.items().map(Entity::from).collect(),
            EntityKind::Owner => self.owners().map(Entity::from).collect(),
            EntityKind::Grouping => self.groupings().map(Entity::from).collect(),
        }
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Item => self.items.len(),
            EntityKind::Owner => self.owners.len(),
            EntityKind::Grouping => self.groupings.len(),
        }
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.stats.record_lookup();
        self.items.get(id)
    }

    pub fn owner(&self, id: &str) -> Option<&Owner> {
        self.stats.record_lookup();
        self.owners.get(id)
    }

    pub fn grouping(&self, id: &str) -> Option<&Grouping> {
        self.stats.record_lookup();
        self.groupings.get(id)
    }

    pub fn items(&self) -> impl ExactSizeIterator<Item = &Item> {
        self.stats.record_full_scan();
        self.items.values()
    }

    pub fn owners(&self) -> impl ExactSizeIterator<Item = &Owner> {
        self.stats.record_full_scan();
        self.owners.values()
    }

    pub fn groupings(&self) -> impl ExactSizeIterator<Item = &Grouping> {
        self.stats.record_full_scan();
        self.groupings.values()
    }

    /// All groupings referencing `owner_id`, in collection order.
    ///
    /// This is a linear scan. The store holds tens of entities, an index by owner
    /// would not pay for itself.
    pub fn find_groupings_by_owner(&self, owner_id: &str) -> Vec<&Grouping> {
        self.stats.record_relationship_scan();
        self.groupings
            .values()
            .filter(|grouping| grouping.owner_id == owner_id)
            .collect()
    }

    /// Whether every foreign key of `grouping` resolves. Groupings that don't are
    /// left out of relationship traversals.
    pub fn is_traversable(&self, grouping: &Grouping) -> bool {
        self.owners.contains_key(&grouping.owner_id)
            && grouping.item_ids.iter().all(|id| self.items.contains_key(id))
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}

impl TryFrom<Dataset> for EntityStore {
    type Error = StoreError;

    fn try_from(dataset: Dataset) -> Result<Self, Self::Error> {
        Self::new(dataset)
    }
}

fn index<T>(
    kind: EntityKind,
    entities: Vec<T>,
    id: impl Fn(&T) -> &String,
) -> Result<IndexMap<String, T>, StoreError> {
    let mut map = IndexMap::with_capacity(entities.len());

    for entity in entities {
        let key = id(&entity).clone();

        if map.contains_key(&key) {
            return Err(StoreError::DuplicateId { kind, id: key });
        }

        map.insert(key, entity);
    }

    Ok(map)
}
