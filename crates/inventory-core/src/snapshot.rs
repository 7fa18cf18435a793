//! 庫存快照與載入介面

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

use crate::{
    MaterialCode, PriceSortedProducts, Product, RawMaterial, RecipeBook, RecipeLine,
    RecipeLineId, Result, StockLedger,
};

/// 某一時間點的一致性庫存快照
#[derive(Debug, Clone, Serialize)]
pub struct InventorySnapshot {
    /// 來源資料版本
    pub revision: u64,

    /// 快照時間
    pub taken_at: DateTime<Utc>,

    /// 全部原料
    pub materials: Vec<RawMaterial>,

    /// 依售價遞減排序的產品
    pub products: PriceSortedProducts,

    /// 依產品分組的配方
    pub recipes: RecipeBook,
}

impl InventorySnapshot {
    /// 由原始資料組裝快照（產品依售價穩定排序）
    pub fn new(
        materials: Vec<RawMaterial>,
        products: Vec<Product>,
        recipe_lines: impl IntoIterator<Item = RecipeLine>,
    ) -> Self {
        Self {
            revision: 0,
            taken_at: Utc::now(),
            materials,
            products: PriceSortedProducts::sort_by_price(products),
            recipes: RecipeBook::from_lines(recipe_lines),
        }
    }

    /// 建構器模式：設置資料版本
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// 建立新的虛擬庫存副本
    ///
    /// 每次呼叫都回傳獨立的副本，快照本身不會被分配計算修改。
    pub fn stock_ledger(&self) -> StockLedger {
        StockLedger::from_materials(&self.materials)
    }

    /// 找出引用不存在原料的配方明細
    pub fn dangling_recipe_lines(&self) -> Vec<RecipeLineId> {
        let known: HashSet<MaterialCode> = self.materials.iter().map(|m| m.code).collect();
        let mut dangling: Vec<RecipeLineId> = self
            .recipes
            .lines()
            .filter(|line| !known.contains(&line.raw_material_code))
            .map(|line| line.id)
            .collect();
        dangling.sort();
        dangling
    }
}

/// 快照載入器（持久化層邊界）
///
/// 實作必須在單一讀取範圍內組裝原料、產品與配方，確保快照反映同一時間點。
pub trait SnapshotLoader {
    fn load_snapshot(&self) -> Result<InventorySnapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProductCode, RecipeLineId};
    use rust_decimal::Decimal;

    fn sample_snapshot() -> InventorySnapshot {
        InventorySnapshot::new(
            vec![RawMaterial::new(MaterialCode(1), "Madeira", Decimal::from(10))],
            vec![
                Product::new(ProductCode(2), "Banco Simples", Decimal::from(50)),
                Product::new(ProductCode(1), "Mesa Luxo", Decimal::from(200)),
            ],
            vec![
                RecipeLine::new(RecipeLineId(1), ProductCode(1), MaterialCode(1), Decimal::from(2)),
                RecipeLine::new(RecipeLineId(2), ProductCode(2), MaterialCode(1), Decimal::ONE),
            ],
        )
    }

    #[test]
    fn test_snapshot_orders_products_by_price() {
        let snapshot = sample_snapshot();

        let names: Vec<&str> = snapshot.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mesa Luxo", "Banco Simples"]);
    }

    #[test]
    fn test_stock_ledger_is_independent_copy() {
        let snapshot = sample_snapshot();

        let mut ledger = snapshot.stock_ledger();
        ledger.reserve(MaterialCode(1), Decimal::from(10)).unwrap();

        assert_eq!(ledger.available(MaterialCode(1)), Decimal::ZERO);
        assert_eq!(snapshot.materials[0].stock_quantity, Decimal::from(10));
        assert_eq!(
            snapshot.stock_ledger().available(MaterialCode(1)),
            Decimal::from(10)
        );
    }

    #[test]
    fn test_dangling_recipe_lines() {
        let mut snapshot = sample_snapshot().with_revision(3);
        snapshot.recipes.insert(RecipeLine::new(
            RecipeLineId(9),
            ProductCode(1),
            MaterialCode(404),
            Decimal::ONE,
        ));

        assert_eq!(snapshot.revision, 3);
        assert_eq!(snapshot.dangling_recipe_lines(), vec![RecipeLineId(9)]);
    }
}
