//! 生產建議報表

use chrono::{DateTime, Utc};
use inventory_core::{MaterialCode, ProductionSuggestion, SuggestionConfig};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::SuggestionResult;

/// 剩餘庫存明細
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingStock {
    pub material_code: MaterialCode,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
}

/// 生產建議報表
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub suggestions: Vec<ProductionSuggestion>,
    pub total_units: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_estimated_value: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_stock: Option<Vec<RemainingStock>>,
    pub warnings: Vec<String>,
}

impl SuggestionReport {
    /// 由計算結果建立報表
    pub fn from_result(result: &SuggestionResult, config: &SuggestionConfig) -> Self {
        let suggestions: Vec<ProductionSuggestion> = match config.value_decimal_places {
            Some(places) => result
                .suggestions
                .iter()
                .cloned()
                .map(|s| s.rounded(places))
                .collect(),
            None => result.suggestions.clone(),
        };

        // 合計取自輸出列，與表中數字一致
        let total_estimated_value = suggestions
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.total_estimated_value));

        let remaining_stock = config.include_remaining_stock.then(|| {
            result
                .remaining_stock
                .sorted_entries()
                .into_iter()
                .map(|(material_code, quantity)| RemainingStock {
                    material_code,
                    quantity,
                })
                .collect()
        });

        Self {
            run_id: result.run_id,
            generated_at: result.generated_at,
            suggestions,
            total_units: result.total_units(),
            total_estimated_value,
            remaining_stock,
            warnings: result.warnings.iter().map(|w| w.message.clone()).collect(),
        }
    }

    /// 只輸出建議列（對外查詢回應本體）
    pub fn suggestions_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.suggestions)
    }

    /// 完整報表 JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for SuggestionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "生產建議 {} ({})", self.run_id, self.generated_at)?;

        if self.suggestions.is_empty() {
            writeln!(f, "  （庫存不足以生產任何產品）")?;
        }

        for s in &self.suggestions {
            writeln!(
                f,
                "  - [{}] {} 售價 {} × {} = {}",
                s.product_code,
                s.product_name,
                s.product_price,
                s.quantity_to_produce,
                s.total_estimated_value
            )?;
        }

        writeln!(
            f,
            "合計: {} 單位，預估價值 {}",
            self.total_units, self.total_estimated_value
        )?;

        if let Some(stock) = &self.remaining_stock {
            writeln!(f, "剩餘庫存:")?;
            for line in stock {
                writeln!(f, "  - 原料 {}: {}", line.material_code, line.quantity)?;
            }
        }

        for warning in &self.warnings {
            writeln!(f, "警告: {}", warning)?;
        }

        Ok(())
    }
}
