//! 虛擬庫存帳（分配用的工作副本）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{InventoryError, MaterialCode, RawMaterial, Result};

/// 虛擬庫存
///
/// 一次分配計算專用的原料數量副本。分配引擎以值接收，計算中就地扣減，
/// 結束後隨結果交回；永不回寫持久化庫存。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLedger {
    quantities: HashMap<MaterialCode, Decimal>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 從原料清單建立庫存副本
    pub fn from_materials<'a>(materials: impl IntoIterator<Item = &'a RawMaterial>) -> Self {
        materials
            .into_iter()
            .map(|m| (m.code, m.stock_quantity))
            .collect()
    }

    /// 建構器模式：設置原料數量
    pub fn with_quantity(mut self, code: MaterialCode, quantity: Decimal) -> Self {
        self.set(code, quantity);
        self
    }

    /// 設置原料數量
    pub fn set(&mut self, code: MaterialCode, quantity: Decimal) {
        self.quantities.insert(code, quantity);
    }

    /// 是否記錄此原料
    pub fn contains(&self, code: MaterialCode) -> bool {
        self.quantities.contains_key(&code)
    }

    /// 可用數量，未記錄的原料視為零
    pub fn available(&self, code: MaterialCode) -> Decimal {
        self.quantities.get(&code).copied().unwrap_or(Decimal::ZERO)
    }

    /// 預留（扣減）庫存
    pub fn reserve(&mut self, code: MaterialCode, quantity: Decimal) -> Result<()> {
        let available = self.available(code);
        if quantity > available {
            return Err(InventoryError::InsufficientStock {
                code,
                requested: quantity,
                available,
            });
        }
        self.quantities.insert(code, available - quantity);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// 依原料代碼排序的快照
    pub fn sorted_entries(&self) -> Vec<(MaterialCode, Decimal)> {
        let mut entries: Vec<_> = self.quantities.iter().map(|(c, q)| (*c, *q)).collect();
        entries.sort_by_key(|(code, _)| *code);
        entries
    }
}

impl FromIterator<(MaterialCode, Decimal)> for StockLedger {
    fn from_iter<I: IntoIterator<Item = (MaterialCode, Decimal)>>(iter: I) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}
