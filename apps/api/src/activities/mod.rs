// Activity store: CRUD, type search, and participant linking.
// Linked participants are embedded as snapshots, never resolved by reference.

pub mod handlers;
pub mod store;
