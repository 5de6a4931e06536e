use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;
use crate::validate::{validate, ProductForm};

pub fn run<S: CatalogStore>(store: &mut S, form: &ProductForm) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut products = helpers::load_catalog(store, &mut result)?;

    let errors = validate(form, &products, None);
    if !errors.is_empty() {
        result.field_errors = errors;
        result.add_message(CmdMessage::error("Periksa kembali input Anda."));
        return Ok(result);
    }

    let product = form.assemble(helpers::next_product_id(&products))?;
    products.insert(0, product.clone());
    store.save_products(&products)?;

    result.add_message(CmdMessage::success("Produk berhasil ditambahkan."));
    result.products.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryStore};
    use crate::validate::Field;

    #[test]
    fn prepends_the_new_product_and_persists() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &fixtures::form("Sembako")).unwrap();

        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].name, "Sembako");

        let persisted = store.load_products().unwrap().unwrap();
        assert_eq!(persisted.len(), 3); // two seeds + the new record, newest first
        assert_eq!(persisted[0].name, "Sembako");
        assert_eq!(persisted[1].name, "Makanan");
    }

    #[test]
    fn assigns_distinct_increasing_ids() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store, &fixtures::form("Sembako")).unwrap();
        let second = run(&mut store, &fixtures::form("Gula Pasir")).unwrap();
        assert!(second.products[0].id > first.products[0].id);
    }

    #[test]
    fn rejected_submission_is_not_persisted() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &fixtures::form("Ab")).unwrap();

        assert_eq!(result.field_errors.get(Field::Name), Some("Minimal 3 karakter."));
        assert!(result.products.is_empty());

        // Only the seed records made it to the store.
        let persisted = store.load_products().unwrap().unwrap();
        assert_eq!(persisted.len(), 2);
    }

    #[test]
    fn infinite_price_never_reaches_the_blob() {
        let mut store = InMemoryStore::new();
        let mut form = fixtures::form("Sembako");
        form.price = "1e400".to_string();

        let result = run(&mut store, &form).unwrap();
        assert_eq!(
            result.field_errors.get(Field::Price),
            Some("Harga harus angka positif.")
        );

        // The persisted collection still serializes to parseable JSON.
        let persisted = store.load_products().unwrap().unwrap();
        let blob = serde_json::to_string(&persisted).unwrap();
        let reparsed: Vec<crate::model::Product> = serde_json::from_str(&blob).unwrap();
        assert_eq!(reparsed, persisted);
    }

    #[test]
    fn stock_past_u32_max_is_a_field_error_not_a_failure() {
        let mut store = InMemoryStore::new();
        let mut form = fixtures::form("Sembako");
        form.stock = "4294967296".to_string();

        let result = run(&mut store, &form).unwrap();
        assert_eq!(
            result.field_errors.get(Field::Stock),
            Some("Stok harus angka non-negatif.")
        );
        assert!(result.products.is_empty());
    }

    #[test]
    fn duplicate_of_a_seed_record_is_rejected() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &fixtures::form("makanan")).unwrap();
        assert_eq!(
            result.field_errors.get(Field::Name),
            Some("Nama Produk sudah ada.")
        );
    }
}
