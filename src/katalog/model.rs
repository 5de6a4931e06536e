use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KatalogError;

/// Product ids are Unix-millisecond timestamps (the two seed records use 1 and 2).
/// They are opaque to everything except id generation, which only needs ordering.
pub type ProductId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Elektronik,
    Pakaian,
    Makanan,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Elektronik, Category::Pakaian, Category::Makanan];

    /// The serialized form, as stored in the catalog blob.
    pub fn value(self) -> &'static str {
        match self {
            Category::Elektronik => "elektronik",
            Category::Pakaian => "pakaian",
            Category::Makanan => "makanan",
        }
    }

    /// Human-facing label for tables and prompts.
    pub fn label(self) -> &'static str {
        match self {
            Category::Elektronik => "Elektronik",
            Category::Pakaian => "Pakaian",
            Category::Makanan => "Makanan",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Category {
    type Err = KatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "elektronik" => Ok(Category::Elektronik),
            "pakaian" => Ok(Category::Pakaian),
            "makanan" => Ok(Category::Makanan),
            other => Err(KatalogError::Api(format!("Unknown category: {}", other))),
        }
    }
}

/// One product record. Field names follow the persisted JSON layout
/// (camelCase, `releaseDate` as `YYYY-MM-DD`), which is also the layout
/// the original localStorage blob used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub release_date: NaiveDate,
    pub stock: u32,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Makanan".parse::<Category>().unwrap(), Category::Makanan);
        assert_eq!(
            " elektronik ".parse::<Category>().unwrap(),
            Category::Elektronik
        );
        assert!("mebel".parse::<Category>().is_err());
    }

    #[test]
    fn product_serializes_with_camel_case_fields() {
        let product = Product {
            id: 1,
            name: "Makanan".to_string(),
            description: "Produk makanan siap saji".to_string(),
            price: 15000.0,
            category: Category::Makanan,
            release_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            stock: 100,
            is_active: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["releaseDate"], "2025-01-01");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["category"], "makanan");
    }

    #[test]
    fn product_parses_legacy_blob_shape() {
        let blob = r#"{
            "id": 2,
            "name": "Minuman",
            "description": "Aneka minuman dingin & hangat",
            "price": 8000,
            "category": "makanan",
            "releaseDate": "2025-01-02",
            "stock": 200,
            "isActive": true
        }"#;

        let product: Product = serde_json::from_str(blob).unwrap();
        assert_eq!(product.id, 2);
        assert_eq!(product.price, 8000.0);
        assert_eq!(product.category, Category::Makanan);
        assert_eq!(product.stock, 200);
    }
}
