use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{KatalogError, Result};
use crate::model::ProductId;
use crate::store::CatalogStore;
use std::io::{self, Write};

pub fn run<S: CatalogStore>(store: &mut S, id: ProductId, skip_confirm: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut products = helpers::load_catalog(store, &mut result)?;

    let Some(target) = products.iter().find(|p| p.id == id).cloned() else {
        result.add_message(CmdMessage::info("Produk tidak ditemukan."));
        return Ok(result);
    };

    if !skip_confirm {
        print!("Hapus Produk \"{}\"? [y/N]: ", target.name);
        io::stdout().flush().map_err(KatalogError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(KatalogError::Io)?;

        if !matches!(input.trim(), "y" | "Y") {
            result.add_message(CmdMessage::info("Dibatalkan."));
            return Ok(result);
        }
    }

    products.retain(|p| p.id != id);
    store.save_products(&products)?;

    result.add_message(CmdMessage::success(format!(
        "Produk berhasil dihapus: {}",
        target.name
    )));
    result.products.push(target);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn create_then_delete_leaves_no_trace() {
        let mut store = InMemoryStore::new();
        let created = create::run(&mut store, &fixtures::form("Sembako")).unwrap();
        let id = created.products[0].id;

        run(&mut store, id, true).unwrap();

        let persisted = store.load_products().unwrap().unwrap();
        assert!(persisted.iter().all(|p| p.id != id));
        assert_eq!(persisted.len(), 2); // the seeds survive
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, 999, true).unwrap();

        assert!(result.products.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].content, "Produk tidak ditemukan.");
        assert_eq!(store.load_products().unwrap().unwrap().len(), 2);
    }

    #[test]
    fn reports_the_deleted_product() {
        let mut store = InMemoryStore::new();
        let created = create::run(&mut store, &fixtures::form("Sembako")).unwrap();
        let id = created.products[0].id;

        let result = run(&mut store, id, true).unwrap();
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].name, "Sembako");
        assert!(result.messages[0].content.contains("berhasil dihapus"));
    }
}
