//! # Inventory Store
//!
//! 記憶體內持久化層：原料、產品、配方的維護，以及一致性快照載入

pub mod change_tracking;
pub mod memory;

// Re-export 主要類型
pub use change_tracking::{ChangeSet, ChangeTracker};
pub use memory::InMemoryInventoryStore;

use inventory_core::{Product, RecipeLine};
use serde::Serialize;

/// 產品及其配方
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithRecipe {
    pub product: Product,
    pub recipe: Vec<RecipeLine>,
}
