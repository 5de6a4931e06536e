use chrono::{NaiveDate, Utc};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KatalogError, Result};
use crate::model::{Category, Product, ProductId};
use crate::store::CatalogStore;

/// Load the catalog, reconciling the persisted blob with the in-memory view:
/// a never-persisted store is seeded with the two default records (and the
/// seed is persisted immediately), an unparseable blob falls back to an empty
/// collection with a warning on `result`. Only real I/O errors propagate.
pub fn load_catalog<S: CatalogStore>(store: &mut S, result: &mut CmdResult) -> Result<Vec<Product>> {
    match store.load_products() {
        Ok(Some(products)) => Ok(products),
        Ok(None) => {
            let seeded = seed_products();
            store.save_products(&seeded)?;
            Ok(seeded)
        }
        Err(KatalogError::Serialization(e)) => {
            result.add_message(CmdMessage::warning(format!(
                "Gagal memuat data tersimpan ({}), memulai dengan katalog kosong.",
                e
            )));
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// The two records every fresh catalog starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Makanan".to_string(),
            description: "Produk makanan siap saji".to_string(),
            price: 15000.0,
            category: Category::Makanan,
            release_date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid seed date"),
            stock: 100,
            is_active: true,
        },
        Product {
            id: 2,
            name: "Minuman".to_string(),
            description: "Aneka minuman dingin & hangat".to_string(),
            price: 8000.0,
            category: Category::Makanan,
            release_date: NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid seed date"),
            stock: 200,
            is_active: true,
        },
    ]
}

/// Fresh ids are the current Unix millis, bumped past the largest existing id
/// so that two creations in the same millisecond still get distinct,
/// increasing ids.
pub fn next_product_id(products: &[Product]) -> ProductId {
    let now = Utc::now().timestamp_millis();
    let max = products.iter().map(|p| p.id).max().unwrap_or(0);
    now.max(max + 1)
}
