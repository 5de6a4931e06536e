use super::CatalogStore;
use crate::error::Result;
use crate::model::Product;

/// Test-only backend: the same load/save contract as [`super::fs::FileStore`],
/// including the never-persisted `None` state, with no filesystem.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Option<Vec<Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn load_products(&self) -> Result<Option<Vec<Product>>> {
        Ok(self.products.clone())
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.products = Some(products.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Category, Product, ProductId};
    use crate::validate::ProductForm;
    use chrono::NaiveDate;

    pub fn product(id: ProductId, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("Deskripsi {}", name),
            price: 10000.0,
            category: Category::Makanan,
            release_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            stock: 10,
            is_active: true,
        }
    }

    /// A form that passes validation as long as `name` is unique.
    pub fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            description: String::new(),
            price: "10000".to_string(),
            category: "makanan".to_string(),
            release_date: "2025-01-01".to_string(),
            stock: "5".to_string(),
            is_active: true,
        }
    }
}
