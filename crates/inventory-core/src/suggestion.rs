//! 生產建議模型（分配計算結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Product, ProductCode};

/// 生產建議
///
/// 只存在於一次分配計算的輸出中，不持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSuggestion {
    /// 產品代碼
    pub product_code: ProductCode,

    /// 產品名稱
    pub product_name: String,

    /// 產品售價
    #[serde(with = "rust_decimal::serde::float")]
    pub product_price: Decimal,

    /// 建議生產數量
    pub quantity_to_produce: u64,

    /// 預估總價值（售價 × 數量）
    #[serde(with = "rust_decimal::serde::float")]
    pub total_estimated_value: Decimal,
}

impl ProductionSuggestion {
    /// 為產品創建生產建議
    pub fn new(product: &Product, quantity_to_produce: u64) -> Self {
        Self {
            product_code: product.code,
            product_name: product.name.clone(),
            product_price: product.price,
            quantity_to_produce,
            total_estimated_value: product
                .price
                .saturating_mul(Decimal::from(quantity_to_produce)),
        }
    }

    /// 將售價四捨五入到指定小數位，並以新售價重算預估價值
    ///
    /// 正售價若會被捨入為零，保留原售價。
    pub fn rounded(mut self, decimal_places: u32) -> Self {
        let price = self.product_price.round_dp(decimal_places);
        if price > Decimal::ZERO || self.product_price <= Decimal::ZERO {
            self.product_price = price;
        }
        self.total_estimated_value = self
            .product_price
            .saturating_mul(Decimal::from(self.quantity_to_produce));
        self
    }
}
