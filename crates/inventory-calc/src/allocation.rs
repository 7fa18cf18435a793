//! 共用庫存貪婪分配
//!
//! 依售價遞減逐一處理產品：每個產品取最受限原料的可生產數量，
//! 並立即從虛擬庫存扣減，後續（較低優先）產品只能使用剩餘庫存。
//! 這是貪婪法而非全域最佳解，輸出語意必須保持不變。

use inventory_core::{
    InventoryError, PriceSortedProducts, Product, ProductionSuggestion, RecipeBook, RecipeLine,
    StockLedger,
};
use rust_decimal::Decimal;

use crate::producible::{MaterialRequirement, ProducibleCalculator};
use crate::{SuggestionResult, SuggestionWarning};

/// 以預設行為執行分配（收集警告）
pub fn suggest_production(
    stock: StockLedger,
    products: &PriceSortedProducts,
    recipes: &RecipeBook,
) -> SuggestionResult {
    AllocationCalculator::allocate(stock, products, recipes)
}

/// 分配計算器
pub struct AllocationCalculator;

impl AllocationCalculator {
    /// 執行分配
    ///
    /// `stock` 以值傳入，是本次計算專屬的虛擬庫存；扣減後隨結果回傳。
    pub fn allocate(
        stock: StockLedger,
        products: &PriceSortedProducts,
        recipes: &RecipeBook,
    ) -> SuggestionResult {
        tracing::info!(
            "開始生產建議計算：產品 {} 筆，配方明細 {} 筆，原料 {} 筆",
            products.len(),
            recipes.line_count(),
            stock.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = SuggestionResult::empty(stock);

        for product in products {
            let lines = recipes.lines_for(product.code);

            if lines.is_empty() {
                tracing::debug!("產品 {} 沒有配方，跳過", product.code);
                result.add_warning(SuggestionWarning::info(
                    product.code,
                    format!("產品 {} 沒有配方明細", product.name),
                ));
                continue;
            }

            Self::inspect_lines(product, lines, &mut result);

            let requirements = match ProducibleCalculator::requirements(lines) {
                Some(requirements) => requirements,
                None => {
                    tracing::debug!("產品 {} 含無效用量，可生產數量為 0", product.code);
                    continue;
                }
            };

            let quantity =
                ProducibleCalculator::max_for_requirements(&requirements, &result.remaining_stock);

            if quantity == 0 {
                tracing::debug!("產品 {} 庫存不足，不建議生產", product.code);
                continue;
            }

            match Self::reserve(&mut result.remaining_stock, &requirements, quantity) {
                Ok(()) => {
                    tracing::debug!(
                        "產品 {} 建議生產 {} 單位（售價 {}）",
                        product.code,
                        quantity,
                        product.price
                    );
                    result
                        .suggestions
                        .push(ProductionSuggestion::new(product, quantity));
                }
                Err(e) => {
                    tracing::error!("產品 {} 扣減庫存失敗: {}", product.code, e);
                    result.add_warning(SuggestionWarning::error(product.code, e.to_string()));
                }
            }
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("生產建議計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("建議生產產品數量: {}", result.suggestions.len());

        result
    }

    /// 記錄無效用量與庫存中不存在的原料
    fn inspect_lines(product: &Product, lines: &[RecipeLine], result: &mut SuggestionResult) {
        for line in lines {
            if !line.is_usable() {
                tracing::warn!(
                    "產品 {} 配方明細 {} 用量無效: {}",
                    product.code,
                    line.id,
                    line.quantity_needed
                );
                result.add_warning(SuggestionWarning::warning(
                    product.code,
                    format!(
                        "配方明細 {} 用量 {} 不大於零，產品無法生產",
                        line.id, line.quantity_needed
                    ),
                ));
            } else if !result.remaining_stock.contains(line.raw_material_code) {
                result.add_warning(SuggestionWarning::warning(
                    product.code,
                    format!("原料 {} 不在庫存資料中，視為零", line.raw_material_code),
                ));
            }
        }
    }

    /// 從虛擬庫存扣減產品用量
    ///
    /// 先確認每種原料都足夠再扣減，不會留下部分扣減。
    fn reserve(
        stock: &mut StockLedger,
        requirements: &[MaterialRequirement],
        quantity: u64,
    ) -> inventory_core::Result<()> {
        let consumption: Vec<_> = requirements
            .iter()
            .map(|r| (r.material, r.per_unit.saturating_mul(Decimal::from(quantity))))
            .collect();

        if let Some(&(code, requested)) = consumption
            .iter()
            .find(|(code, consumed)| *consumed > stock.available(*code))
        {
            return Err(InventoryError::InsufficientStock {
                code,
                requested,
                available: stock.available(code),
            });
        }

        for (code, consumed) in consumption {
            stock.reserve(code, consumed)?;
        }
        Ok(())
    }
}
