use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

// Takes &mut because a first-ever load seeds and persists the defaults.
pub fn run<S: CatalogStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let products = helpers::load_catalog(store, &mut result)?;
    Ok(result.with_products(products))
}
