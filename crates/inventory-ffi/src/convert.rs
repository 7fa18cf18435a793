//! 邊界數值轉換（不依賴 Python 執行環境）

use inventory_core::{InventoryError, Result, SuggestionConfig};
use rust_decimal::Decimal;

/// f64 轉 Decimal，NaN、無限大與超出範圍的值拒絕
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(InventoryError::Validation(format!(
            "{} 不是有限數值: {}",
            field, value
        )));
    }
    Decimal::try_from(value)
        .map_err(|_| InventoryError::Validation(format!("{} 超出範圍: {}", field, value)))
}

/// 由 Python 端欄位建立計算配置
pub fn build_config(
    value_decimal_places: Option<u32>,
    collect_warnings: bool,
    include_remaining_stock: bool,
) -> SuggestionConfig {
    let config = SuggestionConfig::new()
        .with_collect_warnings(collect_warnings)
        .with_include_remaining_stock(include_remaining_stock);

    match value_decimal_places {
        Some(places) => config.with_value_decimal_places(places),
        None => config,
    }
}
