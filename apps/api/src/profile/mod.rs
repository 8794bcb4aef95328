// Context profile generation: business wizard expansion, per-request content
// profiles, completeness analysis. All generators are pure and synchronous —
// the engine trait is the seam for a future model-backed backend.

pub mod analyzer;
pub mod business;
pub mod content;
pub mod engine;
pub mod handlers;
