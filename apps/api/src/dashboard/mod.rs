// Dashboard surface: the in-memory record store, CSV export, and the
// read-side handlers. The store is the only cross-invocation mutable state.

pub mod export;
pub mod handlers;
pub mod store;
