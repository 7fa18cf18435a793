//! Python 綁定實現

use inventory_calc::SuggestionEngine;
use inventory_core::{
    InventorySnapshot, MaterialCode, Product, ProductCode, RawMaterial, RecipeLine, RecipeLineId,
    SuggestionConfig,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::Decimal;

use crate::convert::{build_config, decimal_from_f64};

fn to_decimal(field: &str, value: f64) -> PyResult<Decimal> {
    decimal_from_f64(field, value).map_err(validation_error)
}

fn validation_error(e: inventory_core::InventoryError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python 計算配置
#[pyclass(name = "SuggestionConfig")]
#[derive(Clone)]
pub struct PySuggestionConfig {
    #[pyo3(get, set)]
    pub value_decimal_places: Option<u32>,
    #[pyo3(get, set)]
    pub collect_warnings: bool,
    #[pyo3(get, set)]
    pub include_remaining_stock: bool,
}

#[pymethods]
impl PySuggestionConfig {
    #[new]
    #[pyo3(signature = (value_decimal_places=None, collect_warnings=true, include_remaining_stock=true))]
    fn new(
        value_decimal_places: Option<u32>,
        collect_warnings: bool,
        include_remaining_stock: bool,
    ) -> Self {
        Self {
            value_decimal_places,
            collect_warnings,
            include_remaining_stock,
        }
    }
}

/// 內部方法實現（不暴露給 Python）
impl PySuggestionConfig {
    pub(crate) fn to_rust_config(&self) -> SuggestionConfig {
        build_config(
            self.value_decimal_places,
            self.collect_warnings,
            self.include_remaining_stock,
        )
    }
}

/// Python 生產建議引擎
///
/// 逐筆加入原料、產品與配方後呼叫 `suggest()`，每次計算都使用新的庫存副本。
#[pyclass(name = "SuggestionEngine")]
pub struct PySuggestionEngine {
    config: SuggestionConfig,
    materials: Vec<RawMaterial>,
    products: Vec<Product>,
    recipe_lines: Vec<RecipeLine>,
}

#[pymethods]
impl PySuggestionEngine {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<PySuggestionConfig>) -> Self {
        Self {
            config: config
                .map(|c| c.to_rust_config())
                .unwrap_or_default(),
            materials: Vec::new(),
            products: Vec::new(),
            recipe_lines: Vec::new(),
        }
    }

    /// 加入原料
    fn add_raw_material(&mut self, code: u64, name: String, stock_quantity: f64) -> PyResult<()> {
        let material = RawMaterial::new(
            MaterialCode(code),
            name,
            to_decimal("stock_quantity", stock_quantity)?,
        );
        material.validate().map_err(validation_error)?;
        self.materials.push(material);
        Ok(())
    }

    /// 加入產品
    fn add_product(&mut self, code: u64, name: String, price: f64) -> PyResult<()> {
        let product = Product::new(ProductCode(code), name, to_decimal("price", price)?);
        product.validate().map_err(validation_error)?;
        self.products.push(product);
        Ok(())
    }

    /// 加入配方明細（用量不大於零時該產品不會被建議）
    fn add_recipe_line(
        &mut self,
        product_code: u64,
        raw_material_code: u64,
        quantity_needed: f64,
    ) -> PyResult<()> {
        let id = RecipeLineId(self.recipe_lines.len() as u64 + 1);
        self.recipe_lines.push(RecipeLine::new(
            id,
            ProductCode(product_code),
            MaterialCode(raw_material_code),
            to_decimal("quantity_needed", quantity_needed)?,
        ));
        Ok(())
    }

    /// 執行計算，回傳生產建議 JSON 陣列
    fn suggest(&self) -> PyResult<String> {
        let engine = SuggestionEngine::new(self.config.clone());
        let report = engine.report(&engine.suggest(&self.snapshot()));
        report
            .suggestions_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// 執行計算，回傳完整報表 JSON
    fn report(&self) -> PyResult<String> {
        let engine = SuggestionEngine::new(self.config.clone());
        let report = engine.report(&engine.suggest(&self.snapshot()));
        report
            .to_json_pretty()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.products.len()
    }
}

impl PySuggestionEngine {
    fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::new(
            self.materials.clone(),
            self.products.clone(),
            self.recipe_lines.iter().cloned(),
        )
    }
}
