//! 簡單生產建議示例

use inventory::{
    suggest_production, MaterialCode, PriceSortedProducts, Product, ProductCode, RecipeBook,
    RecipeLine, RecipeLineId, StockLedger,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("=== 簡單生產建議示例 ===\n");

    // 虛擬庫存：木材 10
    let stock = StockLedger::new().with_quantity(MaterialCode(1), Decimal::from(10));

    // 產品（依售價遞減）
    let products = PriceSortedProducts::from_sorted(vec![
        Product::new(ProductCode(1), "Mesa Luxo", Decimal::from(200)),
        Product::new(ProductCode(2), "Banco Simples", Decimal::from(50)),
    ])?;

    // 配方
    let recipes = RecipeBook::from_lines(vec![
        RecipeLine::new(RecipeLineId(1), ProductCode(1), MaterialCode(1), Decimal::from(2)),
        RecipeLine::new(RecipeLineId(2), ProductCode(2), MaterialCode(1), Decimal::ONE),
    ]);

    let result = suggest_production(stock, &products, &recipes);

    println!("生產建議:");
    for s in &result.suggestions {
        println!(
            "  - {}: {} 單位，預估價值 {}",
            s.product_name, s.quantity_to_produce, s.total_estimated_value
        );
    }
    println!(
        "\n剩餘木材: {}",
        result.remaining_stock.available(MaterialCode(1))
    );

    Ok(())
}
