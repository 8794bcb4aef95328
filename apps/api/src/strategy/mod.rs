// Strategy persistence: versioned blobs in `strategies`, a mirror on the
// user row, and the normalized tables behind the roadmap view.

pub mod handlers;
pub mod store;
