//! 變更追蹤

use inventory_core::{MaterialCode, ProductCode};
use std::collections::BTreeSet;

/// 自上次確認後變動的實體
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub materials: BTreeSet<MaterialCode>,
    pub products: BTreeSet<ProductCode>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty() && self.products.is_empty()
    }
}

/// 變更追蹤器
///
/// 每次寫入遞增版本號，並記錄受影響的原料與產品，
/// 讓呼叫端判斷先前的生產建議是否已過期。
#[derive(Debug, Default)]
pub struct ChangeTracker {
    revision: u64,
    pending: ChangeSet,
}

impl ChangeTracker {
    /// 創建新的追蹤器
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記原料已變動
    pub fn mark_material(&mut self, code: MaterialCode) {
        self.revision += 1;
        self.pending.materials.insert(code);
    }

    /// 標記產品（含配方）已變動
    pub fn mark_product(&mut self, code: ProductCode) {
        self.revision += 1;
        self.pending.products.insert(code);
    }

    /// 目前版本號
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 未確認的變動
    pub fn pending(&self) -> &ChangeSet {
        &self.pending
    }

    /// 取出並清除所有未確認的變動（版本號不重置）
    pub fn take_pending(&mut self) -> ChangeSet {
        std::mem::take(&mut self.pending)
    }
}
