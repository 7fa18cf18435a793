//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{InventoryError, MaterialCode, Result};

/// 原料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原料代碼
    pub code: MaterialCode,

    /// 名稱（非空且唯一）
    pub name: String,

    /// 現有庫存（不可為負）
    pub stock_quantity: Decimal,
}

impl RawMaterial {
    /// 創建新的原料記錄
    pub fn new(code: MaterialCode, name: impl Into<String>, stock_quantity: Decimal) -> Self {
        Self {
            code,
            name: name.into(),
            stock_quantity,
        }
    }

    /// 建構器模式：設置庫存
    pub fn with_stock_quantity(mut self, stock_quantity: Decimal) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }

    /// 驗證必填欄位與庫存非負
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::Validation("原料名稱不可為空".to_string()));
        }
        if self.stock_quantity < Decimal::ZERO {
            return Err(InventoryError::Validation(format!(
                "原料 {} 庫存不可為負: {}",
                self.code, self.stock_quantity
            )));
        }
        Ok(())
    }
}
