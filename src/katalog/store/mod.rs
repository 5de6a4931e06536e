//! # Storage Layer
//!
//! Storage abstraction for the catalog. The [`CatalogStore`] trait keeps the
//! command layer decoupled from persistence details and lets tests run against
//! [`memory::InMemoryStore`] without touching the filesystem.
//!
//! The persisted format is deliberately dumb: one JSON array of product
//! records (`products.json`), rewritten in full after every mutation. The
//! collection is small and single-user, so there is no diffing, no
//! transaction log, and no partial-failure recovery.
//!
//! - [`fs::FileStore`]: production file-based storage
//! - [`memory::InMemoryStore`]: in-memory storage for testing

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog persistence.
pub trait CatalogStore {
    /// Read the persisted collection. `Ok(None)` means nothing has ever been
    /// persisted (distinct from an empty collection); an unreadable blob is
    /// a `Serialization` error, which callers recover from.
    fn load_products(&self) -> Result<Option<Vec<Product>>>;

    /// Overwrite the persisted collection with `products`, in order.
    fn save_products(&mut self, products: &[Product]) -> Result<()>;
}
