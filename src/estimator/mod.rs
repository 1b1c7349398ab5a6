//! Footprint estimation core: input record, rate tables, and the
//! pure estimate computation.

/// Estimate computation and breakdown accounting.
pub mod estimate;
pub mod rates;
pub mod types;

// Re-export the main types for convenience
pub use estimate::Estimate;
pub use types::Category;
pub use types::DwellingSize;
pub use types::Habitation;
pub use types::Household;
