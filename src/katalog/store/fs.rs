use super::CatalogStore;
use crate::error::{KatalogError, Result};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILENAME: &str = "products.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(KatalogError::Io)?;
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load_products(&self) -> Result<Option<Vec<Product>>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(data_file).map_err(KatalogError::Io)?;
        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(KatalogError::Serialization)?;
        Ok(Some(products))
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(products).map_err(KatalogError::Serialization)?;
        fs::write(self.data_file(), content).map_err(KatalogError::Io)?;
        Ok(())
    }
}
