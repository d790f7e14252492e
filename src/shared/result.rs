/// Result alias used across the crate; errors are `anyhow::Error` so that
/// adapters can attach context while propagating with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
