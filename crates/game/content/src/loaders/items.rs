//! Item catalog loader.

use std::collections::HashMap;
use std::path::Path;

use combat_core::{Item, ItemOracle, ItemUseResult, normalize_key};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemFile {
    items: Vec<Item>,
}

/// In-memory [`ItemOracle`].
///
/// `use_item` reports the catalog effect; stock keeping belongs to the
/// inventory service that wraps this catalog.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, Item>,
}

impl ItemCatalog {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (normalize_key(&item.id), item))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(&normalize_key(item_id))
    }

    fn use_item(&self, item_id: &str) -> Option<ItemUseResult> {
        self.item(item_id).map(|item| ItemUseResult {
            item_id: item.id.clone(),
            effect: item.effect.clone(),
        })
    }
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        Ok(ItemCatalog::new(file.items))
    }
}
