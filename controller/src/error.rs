/// Rejected movement tuning.
///
/// The per-frame operations never fail; only building a controller from a
/// [`MovementConfig`](crate::MovementConfig) can.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{0}` must be a finite number")]
    NotFinite(&'static str),
    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
}
