//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{InventoryError, ProductCode, Result};

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品代碼
    pub code: ProductCode,

    /// 名稱
    pub name: String,

    /// 售價（必須大於零）
    pub price: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(code: ProductCode, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            code,
            name: name.into(),
            price,
        }
    }

    /// 建構器模式：設置售價
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// 驗證必填欄位與售價為正
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::Validation("產品名稱不可為空".to_string()));
        }
        if self.price <= Decimal::ZERO {
            return Err(InventoryError::Validation(format!(
                "產品 {} 售價必須大於零: {}",
                self.code, self.price
            )));
        }
        Ok(())
    }
}

/// 依售價遞減排序的產品清單
///
/// 分配引擎依此順序決定優先權。只能透過 [`PriceSortedProducts::sort_by_price`]
/// 或 [`PriceSortedProducts::from_sorted`] 建立，因此持有此類型即保證排序成立。
/// 同價產品保持呼叫端提供的相對順序。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSortedProducts {
    products: Vec<Product>,
}

impl PriceSortedProducts {
    /// 依售價遞減排序（穩定排序）
    pub fn sort_by_price(mut products: Vec<Product>) -> Self {
        products.sort_by(|a, b| b.price.cmp(&a.price));
        Self { products }
    }

    /// 接受已排序的清單，順序不符時回傳錯誤
    pub fn from_sorted(products: Vec<Product>) -> Result<Self> {
        if let Some(position) = products
            .windows(2)
            .position(|pair| pair[0].price < pair[1].price)
        {
            return Err(InventoryError::NotPriceSorted {
                position: position + 1,
            });
        }
        Ok(Self { products })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl<'a> IntoIterator for &'a PriceSortedProducts {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: u64, name: &str, price: i64) -> Product {
        Product::new(ProductCode(code), name, Decimal::from(price))
    }

    #[test]
    fn test_create_product() {
        let product = product(1, "Mesa Luxo", 200);

        assert_eq!(product.code, ProductCode(1));
        assert_eq!(product.price, Decimal::from(200));
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_price() {
        let free = product(2, "Brinde", 0);
        assert!(free.validate().is_err());

        let negative = free.with_price(Decimal::from(-3));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_sort_by_price_descending() {
        let sorted = PriceSortedProducts::sort_by_price(vec![
            product(1, "Banco", 50),
            product(2, "Mesa", 200),
            product(3, "Cadeira", 120),
        ]);

        let codes: Vec<u64> = sorted.iter().map(|p| p.code.value()).collect();
        assert_eq!(codes, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_price_keeps_tie_order() {
        let sorted = PriceSortedProducts::sort_by_price(vec![
            product(5, "B", 10),
            product(3, "A", 10),
            product(9, "C", 30),
            product(1, "D", 10),
        ]);

        let codes: Vec<u64> = sorted.iter().map(|p| p.code.value()).collect();
        assert_eq!(codes, vec![9, 5, 3, 1]);
    }

    #[test]
    fn test_from_sorted_rejects_ascending_pair() {
        let result = PriceSortedProducts::from_sorted(vec![
            product(1, "A", 100),
            product(2, "B", 100),
            product(3, "C", 150),
        ]);

        assert!(matches!(
            result,
            Err(InventoryError::NotPriceSorted { position: 2 })
        ));
    }

    #[test]
    fn test_from_sorted_accepts_descending() {
        let sorted = PriceSortedProducts::from_sorted(vec![
            product(1, "A", 300),
            product(2, "B", 100),
        ])
        .unwrap();

        assert_eq!(sorted.len(), 2);
        assert!(!sorted.is_empty());
    }
}
