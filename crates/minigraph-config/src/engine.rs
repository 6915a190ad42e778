#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// How invocations that produce no output are reported
    pub error_mode: ErrorMode,
}

/// Reporting policy for invocations that cannot be resolved.
///
/// Both modes produce the same `data`. Strict mode additionally returns one
/// structured error per omitted field or alias.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    #[default]
    Lenient,
    Strict,
}

impl ErrorMode {
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}
