//! 配方（物料清單）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{InventoryError, MaterialCode, ProductCode, RecipeLineId, Result};

/// 配方明細：每單位產品消耗的原料數量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLine {
    /// 明細ID
    pub id: RecipeLineId,

    /// 所屬產品
    pub product_code: ProductCode,

    /// 使用的原料
    pub raw_material_code: MaterialCode,

    /// 每單位產品用量
    pub quantity_needed: Decimal,
}

impl RecipeLine {
    /// 創建新的配方明細
    pub fn new(
        id: RecipeLineId,
        product_code: ProductCode,
        raw_material_code: MaterialCode,
        quantity_needed: Decimal,
    ) -> Self {
        Self {
            id,
            product_code,
            raw_material_code,
            quantity_needed,
        }
    }

    /// 用量是否有效（大於零）
    pub fn is_usable(&self) -> bool {
        self.quantity_needed > Decimal::ZERO
    }

    /// 驗證用量為正
    pub fn validate(&self) -> Result<()> {
        if !self.is_usable() {
            return Err(InventoryError::Validation(format!(
                "配方明細 {} 用量必須大於零: {}",
                self.id, self.quantity_needed
            )));
        }
        Ok(())
    }
}

/// 依產品分組的配方明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeBook {
    lines_by_product: HashMap<ProductCode, Vec<RecipeLine>>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按產品分組配方明細（保留輸入順序）
    pub fn from_lines(lines: impl IntoIterator<Item = RecipeLine>) -> Self {
        let mut book = Self::new();
        for line in lines {
            book.insert(line);
        }
        book
    }

    /// 添加配方明細
    pub fn insert(&mut self, line: RecipeLine) {
        self.lines_by_product
            .entry(line.product_code)
            .or_default()
            .push(line);
    }

    /// 取得產品的配方明細，無配方時回傳空切片
    pub fn lines_for(&self, product_code: ProductCode) -> &[RecipeLine] {
        self.lines_by_product
            .get(&product_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// 產品是否有任何配方明細
    pub fn has_recipe(&self, product_code: ProductCode) -> bool {
        !self.lines_for(product_code).is_empty()
    }

    /// 有配方的產品數量
    pub fn product_count(&self) -> usize {
        self.lines_by_product
            .values()
            .filter(|lines| !lines.is_empty())
            .count()
    }

    /// 配方明細總數
    pub fn line_count(&self) -> usize {
        self.lines_by_product.values().map(Vec::len).sum()
    }

    /// 所有配方明細
    pub fn lines(&self) -> impl Iterator<Item = &RecipeLine> {
        self.lines_by_product.values().flatten()
    }
}
