use thiserror::Error;

/// Errors raised while loading or validating a [`VariantConfig`](crate::VariantConfig).
///
/// Resolution itself never fails; these only surface from the loaders and
/// from the opt-in [`VariantConfig::validate`](crate::VariantConfig::validate) lint.
#[derive(Debug, Error)]
pub enum VariantError {
    #[error("toml variant config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json variant config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read variant config: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context} references undeclared axis `{axis}`")]
    UnknownAxis { context: String, axis: String },

    #[error("default for axis `{axis}` is `{value}`, which the axis does not declare")]
    UnknownValue { axis: String, value: String },

    #[error("compound rule #{rule} has an empty value set for axis `{axis}`")]
    EmptyConstraint { rule: usize, axis: String },
}
