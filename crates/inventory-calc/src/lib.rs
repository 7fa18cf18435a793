//! # Production Suggestion Engine
//!
//! 生產建議計算引擎：在共用原料庫存下，依售價優先順序貪婪分配

pub mod allocation;
pub mod engine;
pub mod producible;
pub mod report;

// Re-export 主要類型
pub use allocation::{suggest_production, AllocationCalculator};
pub use engine::SuggestionEngine;
pub use producible::ProducibleCalculator;
pub use report::SuggestionReport;

use chrono::{DateTime, Utc};
use inventory_core::{ProductCode, ProductionSuggestion, StockLedger};
use rust_decimal::Decimal;
use uuid::Uuid;

/// 生產建議計算結果
#[derive(Debug, Clone)]
pub struct SuggestionResult {
    /// 計算批次ID
    pub run_id: Uuid,

    /// 計算時間
    pub generated_at: DateTime<Utc>,

    /// 生產建議（依優先順序）
    pub suggestions: Vec<ProductionSuggestion>,

    /// 分配後的虛擬庫存
    pub remaining_stock: StockLedger,

    /// 警告信息
    pub warnings: Vec<SuggestionWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl SuggestionResult {
    /// 創建空的計算結果
    pub fn empty(remaining_stock: StockLedger) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            suggestions: Vec::new(),
            remaining_stock,
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: SuggestionWarning) {
        self.warnings.push(warning);
    }

    /// 是否沒有任何建議
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// 查找產品的建議
    pub fn suggestion_for(&self, product_code: ProductCode) -> Option<&ProductionSuggestion> {
        self.suggestions
            .iter()
            .find(|s| s.product_code == product_code)
    }

    /// 建議生產總數量
    pub fn total_units(&self) -> u64 {
        self.suggestions
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.quantity_to_produce))
    }

    /// 預估總價值
    pub fn total_estimated_value(&self) -> Decimal {
        self.suggestions
            .iter()
            .fold(Decimal::ZERO, |acc, s| {
                acc.saturating_add(s.total_estimated_value)
            })
    }
}

/// 計算警告
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionWarning {
    pub product_code: ProductCode,
    pub message: String,
    pub severity: WarningSeverity,
}

impl SuggestionWarning {
    pub fn new(product_code: ProductCode, message: String, severity: WarningSeverity) -> Self {
        Self {
            product_code,
            message,
            severity,
        }
    }

    pub fn info(product_code: ProductCode, message: String) -> Self {
        Self::new(product_code, message, WarningSeverity::Info)
    }

    pub fn warning(product_code: ProductCode, message: String) -> Self {
        Self::new(product_code, message, WarningSeverity::Warning)
    }

    pub fn error(product_code: ProductCode, message: String) -> Self {
        Self::new(product_code, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
