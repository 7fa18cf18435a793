//! # Inventory Core
//!
//! 核心資料模型與類型定義（原料、產品、配方、生產建議）

pub mod codes;
pub mod config;
pub mod material;
pub mod product;
pub mod recipe;
pub mod snapshot;
pub mod stock;
pub mod suggestion;

// Re-export 主要類型
pub use codes::{MaterialCode, ProductCode, RecipeLineId};
pub use config::SuggestionConfig;
pub use material::RawMaterial;
pub use product::{PriceSortedProducts, Product};
pub use recipe::{RecipeBook, RecipeLine};
pub use snapshot::{InventorySnapshot, SnapshotLoader};
pub use stock::StockLedger;
pub use suggestion::ProductionSuggestion;

use rust_decimal::Decimal;

/// 庫存系統錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("找不到原料: {0}")]
    RawMaterialNotFound(MaterialCode),

    #[error("找不到產品: {0}")]
    ProductNotFound(ProductCode),

    #[error("找不到配方明細: {0}")]
    RecipeLineNotFound(RecipeLineId),

    #[error("原料名稱重複: {0}")]
    DuplicateMaterialName(String),

    #[error("無法刪除：原料 {0} 仍被產品配方引用")]
    MaterialInUse(MaterialCode),

    #[error("產品配方至少需要一項原料")]
    EmptyRecipe,

    #[error("庫存不足：原料 {code} 需要 {requested}, 可用 {available}")]
    InsufficientStock {
        code: MaterialCode,
        requested: Decimal,
        available: Decimal,
    },

    #[error("產品未依價格遞減排序（位置 {position}）")]
    NotPriceSorted { position: usize },

    #[error("資料驗證失敗: {0}")]
    Validation(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
