//! # Inventory
//!
//! 庫存目錄與生產建議：原料、產品配方，以及共用庫存下依售價優先的生產數量分配

pub use inventory_calc::{
    suggest_production, AllocationCalculator, ProducibleCalculator, SuggestionEngine,
    SuggestionReport, SuggestionResult, SuggestionWarning, WarningSeverity,
};
pub use inventory_core::{
    InventoryError, InventorySnapshot, MaterialCode, PriceSortedProducts, Product, ProductCode,
    ProductionSuggestion, RawMaterial, RecipeBook, RecipeLine, RecipeLineId, Result,
    SnapshotLoader, StockLedger, SuggestionConfig,
};
pub use inventory_store::{ChangeSet, InMemoryInventoryStore, ProductWithRecipe};
