//! 生產建議引擎

use inventory_core::{InventorySnapshot, SnapshotLoader, SuggestionConfig};

use crate::report::SuggestionReport;
use crate::{AllocationCalculator, SuggestionResult};

/// 生產建議引擎
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// 創建新的引擎
    pub fn new(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// 獲取配置引用
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// 對快照計算生產建議
    ///
    /// 每次呼叫都從快照複製新的虛擬庫存，快照不受影響，可重複或並行呼叫。
    pub fn suggest(&self, snapshot: &InventorySnapshot) -> SuggestionResult {
        tracing::debug!(
            "快照版本 {}（{}）",
            snapshot.revision,
            snapshot.taken_at
        );

        let mut result = AllocationCalculator::allocate(
            snapshot.stock_ledger(),
            &snapshot.products,
            &snapshot.recipes,
        );

        if !self.config.collect_warnings {
            result.warnings.clear();
        }

        result
    }

    /// 載入快照後計算生產建議
    pub fn suggest_from<L>(&self, loader: &L) -> inventory_core::Result<SuggestionResult>
    where
        L: SnapshotLoader + ?Sized,
    {
        let snapshot = loader.load_snapshot()?;
        Ok(self.suggest(&snapshot))
    }

    /// 依配置產生報表
    pub fn report(&self, result: &SuggestionResult) -> SuggestionReport {
        SuggestionReport::from_result(result, &self.config)
    }
}
