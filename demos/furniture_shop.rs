//! 家具工坊生產建議完整範例
//!
//! 展示從建立原料、產品配方到產生生產建議報表的流程

use inventory::{InMemoryInventoryStore, SnapshotLoader, SuggestionConfig, SuggestionEngine};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== Furniture Shop Production Suggestion =====\n");

    // 步驟 1: 建立原料
    println!("[1] Create Raw Materials");
    let store = InMemoryInventoryStore::new();
    let wood = store.create_raw_material("Madeira", Decimal::from(120))?;
    let screws = store.create_raw_material("Parafuso", Decimal::from(400))?;
    let fabric = store.create_raw_material("Tecido", Decimal::new(255, 1))?;
    let varnish = store.create_raw_material("Verniz", Decimal::new(75, 1))?;
    for m in store.list_raw_materials() {
        println!("    {} {}: {}", m.code, m.name, m.stock_quantity);
    }

    // 步驟 2: 建立產品與配方
    println!("\n[2] Create Products");
    store.create_product(
        "Mesa de Jantar",
        Decimal::from(1200),
        &[
            (wood.code, Decimal::from(18)),
            (screws.code, Decimal::from(32)),
            (varnish.code, Decimal::ONE),
        ],
    )?;
    store.create_product(
        "Sofá",
        Decimal::from(2500),
        &[
            (wood.code, Decimal::from(25)),
            (fabric.code, Decimal::from(8)),
            (screws.code, Decimal::from(40)),
        ],
    )?;
    store.create_product(
        "Cadeira",
        Decimal::new(34990, 2),
        &[
            (wood.code, Decimal::from(4)),
            (screws.code, Decimal::from(12)),
            (fabric.code, Decimal::new(5, 1)),
            (varnish.code, Decimal::new(25, 2)),
        ],
    )?;
    store.create_product(
        "Banqueta",
        Decimal::new(8950, 2),
        &[(wood.code, Decimal::from(2)), (screws.code, Decimal::from(6))],
    )?;
    for p in store.list_products_by_price_desc().iter() {
        println!("    {} {}: {}", p.code, p.name, p.price);
    }

    // 步驟 3: 載入一致性快照並計算
    println!("\n[3] Run Suggestion Engine");
    let engine = SuggestionEngine::new(SuggestionConfig::new().with_value_decimal_places(2));
    let snapshot = store.load_snapshot()?;
    let result = engine.suggest(&snapshot);
    println!("    Run {} took {:?} ms", result.run_id, result.calculation_time_ms);

    // 步驟 4: 輸出報表
    println!("\n[4] Report");
    let report = engine.report(&result);
    println!("{}", report);
    println!("{}", report.suggestions_json()?);

    Ok(())
}
