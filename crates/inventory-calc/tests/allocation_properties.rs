//! 分配引擎性質測試
//!
//! 隨機產生原料、產品與配方，驗證庫存守恆、優先順序、省略規則、
//! 無效用量保護與單調性。

use inventory_calc::{suggest_production, SuggestionResult};
use inventory_core::{
    MaterialCode, PriceSortedProducts, Product, ProductCode, RecipeBook, RecipeLine, RecipeLineId,
    StockLedger,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

const MATERIALS: u64 = 5;

#[derive(Debug, Clone)]
struct Catalog {
    /// 原料庫存（十分位）
    stock: Vec<u32>,
    /// (售價, [(原料, 用量十分位)])
    products: Vec<(u32, Vec<(u64, u32)>)>,
}

impl Catalog {
    fn ledger(&self) -> StockLedger {
        self.stock
            .iter()
            .enumerate()
            .map(|(i, tenths)| (MaterialCode(i as u64), Decimal::new(*tenths as i64, 1)))
            .collect()
    }

    fn products(&self) -> PriceSortedProducts {
        PriceSortedProducts::sort_by_price(
            self.products
                .iter()
                .enumerate()
                .map(|(i, (price, _))| {
                    Product::new(ProductCode(i as u64), format!("P{}", i), Decimal::from(*price))
                })
                .collect(),
        )
    }

    fn recipes(&self) -> RecipeBook {
        let mut next_id = 0;
        let mut book = RecipeBook::new();
        for (i, (_, lines)) in self.products.iter().enumerate() {
            for (material, tenths) in lines {
                next_id += 1;
                book.insert(RecipeLine::new(
                    RecipeLineId(next_id),
                    ProductCode(i as u64),
                    MaterialCode(*material),
                    Decimal::new(*tenths as i64, 1),
                ));
            }
        }
        book
    }

    fn run(&self) -> SuggestionResult {
        suggest_production(self.ledger(), &self.products(), &self.recipes())
    }
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    let stock = proptest::collection::vec(0u32..500, MATERIALS as usize);
    let line = (0..MATERIALS, 1u32..40);
    let product = (1u32..300, proptest::collection::vec(line, 0..4));
    let products = proptest::collection::vec(product, 1..8);

    (stock, products).prop_map(|(stock, products)| Catalog { stock, products })
}

/// 依建議量計算每種原料的總消耗
fn consumption(catalog: &Catalog, result: &SuggestionResult) -> HashMap<MaterialCode, Decimal> {
    let recipes = catalog.recipes();
    let mut consumed: HashMap<MaterialCode, Decimal> = HashMap::new();
    for s in &result.suggestions {
        for line in recipes.lines_for(s.product_code) {
            *consumed.entry(line.raw_material_code).or_default() +=
                line.quantity_needed * Decimal::from(s.quantity_to_produce);
        }
    }
    consumed
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// 每種原料的總消耗不超過初始庫存，剩餘庫存不為負
    #[test]
    fn consumption_never_exceeds_stock(catalog in arb_catalog()) {
        let initial = catalog.ledger();
        let result = catalog.run();

        for (code, used) in consumption(&catalog, &result) {
            prop_assert!(used <= initial.available(code));
            prop_assert_eq!(result.remaining_stock.available(code), initial.available(code) - used);
        }
        for (_, quantity) in result.remaining_stock.sorted_entries() {
            prop_assert!(quantity >= Decimal::ZERO);
        }
    }

    /// 輸出順序為輸入優先順序的子序列
    #[test]
    fn output_follows_priority_order(catalog in arb_catalog()) {
        let products = catalog.products();
        let result = catalog.run();

        let order: Vec<ProductCode> = products.iter().map(|p| p.code).collect();
        let mut cursor = 0;
        for s in &result.suggestions {
            let position = order[cursor..].iter().position(|c| *c == s.product_code);
            prop_assert!(position.is_some());
            cursor += position.unwrap_or(0) + 1;
        }

        let prices: Vec<Decimal> = result.suggestions.iter().map(|s| s.product_price).collect();
        prop_assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    /// 數量為零或沒有配方的產品不出現在輸出
    #[test]
    fn zero_and_empty_recipes_are_omitted(catalog in arb_catalog()) {
        let recipes = catalog.recipes();
        let result = catalog.run();

        for s in &result.suggestions {
            prop_assert!(s.quantity_to_produce > 0);
            prop_assert!(recipes.has_recipe(s.product_code));
            prop_assert_eq!(
                s.total_estimated_value,
                s.product_price * Decimal::from(s.quantity_to_produce)
            );
        }
    }

    /// 用量不大於零的配方明細使產品無法生產
    #[test]
    fn non_positive_line_blocks_product(catalog in arb_catalog(), target in 0usize..8, negative in any::<bool>()) {
        let target = ProductCode((target % catalog.products.len()) as u64);
        let mut recipes = catalog.recipes();
        let blocked_qty = if negative { Decimal::from(-1) } else { Decimal::ZERO };
        recipes.insert(RecipeLine::new(RecipeLineId(10_000), target, MaterialCode(0), blocked_qty));

        let result = suggest_production(catalog.ledger(), &catalog.products(), &recipes);
        prop_assert!(result.suggestion_for(target).is_none());
    }

    /// 增加庫存不會減少「原料未被更高優先產品使用」之產品的建議量
    #[test]
    fn more_stock_never_reduces_uncontended_products(
        catalog in arb_catalog(),
        material in 0..MATERIALS,
        extra in 1u32..500,
    ) {
        let before = catalog.run();

        let mut richer = catalog.clone();
        richer.stock[material as usize] += extra;
        let after = richer.run();

        let products = catalog.products();
        let recipes = catalog.recipes();
        let mut claimed: HashSet<MaterialCode> = HashSet::new();

        for product in &products {
            let materials: HashSet<MaterialCode> = recipes
                .lines_for(product.code)
                .iter()
                .map(|l| l.raw_material_code)
                .collect();

            if materials.is_disjoint(&claimed) {
                let qty = |r: &SuggestionResult| {
                    r.suggestion_for(product.code).map_or(0, |s| s.quantity_to_produce)
                };
                prop_assert!(qty(&after) >= qty(&before));
            }
            claimed.extend(materials);
        }
    }
}
