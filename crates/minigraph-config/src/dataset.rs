use std::path::PathBuf;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// TOML or JSON file with `items`, `owners` and `groupings`. The built-in
    /// demo data is used when absent.
    pub path: Option<PathBuf>,
}
