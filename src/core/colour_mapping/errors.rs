use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DensityColourMapError {
    #[error("count {count} exceeds maximum {max_count}")]
    CountExceedsMax { count: u32, max_count: u32 },
}
