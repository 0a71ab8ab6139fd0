// Launch Queue Infrastructure - In-Memory Stores
// Implements: OrderedStore (list and ring buffer variants)

mod ring_store;
mod vec_store;

pub use ring_store::RingStore;
pub use vec_store::VecStore;

#[cfg(test)]
mod conformance;
