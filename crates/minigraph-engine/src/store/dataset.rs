use std::path::{Path, PathBuf};

use super::{Grouping, Item, Owner};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("could not read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML dataset {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON dataset {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Seed data of an [`EntityStore`](super::EntityStore).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dataset {
    pub items: Vec<Item>,
    pub owners: Vec<Owner>,
    pub groupings: Vec<Grouping>,
}

impl Dataset {
    /// Reads a dataset file. Files with a `.json` extension are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content).map_err(|source| DatasetError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            toml::from_str(&content).map_err(|source| DatasetError::Toml {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// The coffee shop: three customers, three coffees and four orders.
    pub fn demo() -> Self {
        let items = vec![
            item("coffee1", "Latte", 3.99, "Colombia"),
            item("coffee2", "Espresso", 2.50, "Brazil"),
            item("coffee3", "Cappuccino", 4.20, "Ethiopia"),
        ];

        let owners = vec![
            owner("cust1", "Alice", "alice@example.com"),
            owner("cust2", "Bob", "bob@example.com"),
            owner("cust3", "Charlie", "charlie@example.com"),
        ];

        let groupings = vec![
            grouping("order1", "cust1", &["coffee1", "coffee2"]),
            grouping("order2", "cust2", &["coffee3"]),
            grouping("order3", "cust1", &["coffee3", "coffee1"]),
            grouping("order4", "cust3", &["coffee2"]),
        ];

        Dataset {
            items,
            owners,
            groupings,
        }
    }
}

fn item(id: &str, name: &str, price: f64, origin: &str) -> Item {
    Item {
        id: id.to_string(),
        name: name.to_string(),
        price,
        origin: origin.to_string(),
    }
}

fn owner(id: &str, name: &str, email: &str) -> Owner {
    Owner {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn grouping(id: &str, owner_id: &str, item_ids: &[&str]) -> Grouping {
    Grouping {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        item_ids: item_ids.iter().map(|id| id.to_string()).collect(),
    }
}
