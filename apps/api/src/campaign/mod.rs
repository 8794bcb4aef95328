// Campaign planning: template catalog, sequence generation, per-piece
// success metrics.

pub mod generator;
pub mod handlers;
pub mod metrics;
pub mod templates;
