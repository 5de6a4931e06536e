//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! catalog operations. It dispatches, never formats: no stdout, no stderr,
//! no presentation concerns. Business rules live in `commands/*.rs`.
//!
//! `KatalogApi<S: CatalogStore>` is generic over the storage backend —
//! `FileStore` in production, `InMemoryStore` in tests — so the whole core
//! can be exercised without a filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::store::CatalogStore;
use crate::validate::ProductForm;

pub struct KatalogApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> KatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_product(&mut self, form: &ProductForm) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, form)
    }

    pub fn delete_product(&mut self, id: ProductId, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, skip_confirm)
    }

    pub fn list_products(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    /// Lookup for edit prefill; `None` when the id is not in the catalog.
    pub fn get_product(&mut self, id: ProductId) -> Result<Option<Product>> {
        let result = commands::list::run(&mut self.store)?;
        Ok(result.products.into_iter().find(|p| p.id == id))
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
