//! # Form Validation
//!
//! Pure per-field validation of a candidate product. Given the raw form
//! inputs, the current collection, and the id being edited (if any),
//! [`validate`] produces a [`ValidationErrors`] map — field to human-readable
//! message, absence of a key meaning the field is valid.
//!
//! Every field is checked independently; one bad field never hides another.
//! The validator has no side effects and only consults the collection for the
//! name-uniqueness rule. User-facing messages are Indonesian, matching the
//! rest of the product surface.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};

use crate::error::{KatalogError, Result};
use crate::model::{Category, Product, ProductId};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// A form field, in form order. Keys mirror the persisted field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    ReleaseDate,
    Stock,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::ReleaseDate => "releaseDate",
            Field::Stock => "stock",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field → error message. Ordered so errors print in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

/// Raw form inputs, exactly as submitted. Numbers and dates stay strings
/// until validation has passed; `assemble` turns a clean form into a record.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub release_date: String,
    pub stock: String,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            release_date: String::new(),
            stock: String::new(),
            is_active: true,
        }
    }
}

impl ProductForm {
    fn parsed_price(&self) -> Option<f64> {
        self.price.trim().parse().ok()
    }

    fn parsed_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    fn parsed_release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok()
    }

    // u32 so the parse itself rejects negatives, fractions, and counts the
    // record can't store.
    fn parsed_stock(&self) -> Option<u32> {
        self.stock.trim().parse().ok()
    }

    /// Build the record for a form that already passed [`validate`].
    /// Name and description are stored trimmed.
    pub fn assemble(&self, id: ProductId) -> Result<Product> {
        let (Some(price), Some(category), Some(release_date), Some(stock)) = (
            self.parsed_price(),
            self.parsed_category(),
            self.parsed_release_date(),
            self.parsed_stock(),
        ) else {
            return Err(KatalogError::Api("form has not been validated".to_string()));
        };

        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            category,
            release_date,
            stock,
            is_active: self.is_active,
        })
    }
}

/// Validate a candidate against the current collection, with "today" taken
/// from the local clock. `editing_id` is excluded from the duplicate check.
pub fn validate(
    form: &ProductForm,
    products: &[Product],
    editing_id: Option<ProductId>,
) -> ValidationErrors {
    validate_at(form, products, editing_id, Local::now().date_naive())
}

/// Clock-independent variant of [`validate`].
pub fn validate_at(
    form: &ProductForm,
    products: &[Product],
    editing_id: Option<ProductId>,
    today: NaiveDate,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Nama Produk wajib diisi.");
    } else if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(Field::Name, "Minimal 3 karakter.");
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.insert(Field::Name, "Maksimal 50 karakter.");
    } else {
        let lowered = name.to_lowercase();
        let duplicate = products
            .iter()
            .any(|p| p.name.to_lowercase() == lowered && Some(p.id) != editing_id);
        if duplicate {
            errors.insert(Field::Name, "Nama Produk sudah ada.");
        }
    }

    if form.description.trim().chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(Field::Description, "Deskripsi maksimal 200 karakter.");
    }

    if form.price.trim().is_empty() {
        errors.insert(Field::Price, "Harga wajib diisi.");
    } else {
        match form.parsed_price() {
            // Finite only: "inf" parses, but serde_json writes non-finite
            // floats as null, which would make the blob unreadable.
            Some(price) if price.is_finite() && price > 0.0 => {}
            _ => errors.insert(Field::Price, "Harga harus angka positif."),
        }
    }

    if form.category.trim().is_empty() {
        errors.insert(Field::Category, "Kategori wajib dipilih.");
    } else if form.parsed_category().is_none() {
        errors.insert(Field::Category, "Kategori tidak valid.");
    }

    if form.release_date.trim().is_empty() {
        errors.insert(Field::ReleaseDate, "Tanggal rilis wajib diisi.");
    } else {
        match form.parsed_release_date() {
            None => errors.insert(Field::ReleaseDate, "Tanggal rilis tidak valid."),
            Some(date) if date > today => {
                errors.insert(Field::ReleaseDate, "Tanggal rilis tidak boleh melebihi hari ini.")
            }
            Some(_) => {}
        }
    }

    if form.stock.trim().is_empty() {
        errors.insert(Field::Stock, "Stok wajib diisi.");
    } else {
        if form.parsed_stock().is_none() {
            errors.insert(Field::Stock, "Stok harus angka non-negatif.");
        }
    }

    errors
}
