// src/models.rs
pub mod density_item;
pub mod text_stats;

pub use density_item::WordDensityItem;
pub use text_stats::TextStats;
