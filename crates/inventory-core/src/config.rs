//! 生產建議計算配置

use serde::{Deserialize, Serialize};

use crate::{InventoryError, Result};

/// 生產建議計算配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// 報表中售價與預估價值的小數位數（None 表示不四捨五入）
    pub value_decimal_places: Option<u32>,

    /// 是否收集計算警告（無配方產品、無效用量、未知原料）
    pub collect_warnings: bool,

    /// 報表是否包含分配後的剩餘庫存
    pub include_remaining_stock: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            value_decimal_places: None,
            collect_warnings: true,
            include_remaining_stock: true,
        }
    }
}

impl SuggestionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置價值小數位數
    pub fn with_value_decimal_places(mut self, places: u32) -> Self {
        self.value_decimal_places = Some(places);
        self
    }

    /// 建構器模式：設置是否收集警告
    pub fn with_collect_warnings(mut self, collect: bool) -> Self {
        self.collect_warnings = collect;
        self
    }

    /// 建構器模式：設置報表是否包含剩餘庫存
    pub fn with_include_remaining_stock(mut self, include: bool) -> Self {
        self.include_remaining_stock = include;
        self
    }

    /// 從 JSON 字串載入配置，缺少的欄位使用預設值
    ///
    /// # 範例
    /// ```
    /// # use inventory_core::SuggestionConfig;
    /// let config = SuggestionConfig::from_json_str(r#"{"value_decimal_places": 2}"#).unwrap();
    /// assert_eq!(config.value_decimal_places, Some(2));
    /// assert!(config.collect_warnings);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| InventoryError::Config(e.to_string()))
    }
}
