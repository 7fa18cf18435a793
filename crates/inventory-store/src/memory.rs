//! 記憶體內庫存資料庫

use inventory_core::{
    InventoryError, InventorySnapshot, MaterialCode, PriceSortedProducts, Product, ProductCode,
    RawMaterial, RecipeLine, RecipeLineId, Result, SnapshotLoader,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::change_tracking::{ChangeSet, ChangeTracker};
use crate::ProductWithRecipe;

#[derive(Debug, Default)]
struct StoreState {
    materials: BTreeMap<MaterialCode, RawMaterial>,
    products: BTreeMap<ProductCode, Product>,
    recipe_lines: BTreeMap<RecipeLineId, RecipeLine>,
    next_material_code: u64,
    next_product_code: u64,
    next_recipe_line_id: u64,
    changes: ChangeTracker,
}

impl StoreState {
    fn material(&self, code: MaterialCode) -> Result<&RawMaterial> {
        self.materials
            .get(&code)
            .ok_or(InventoryError::RawMaterialNotFound(code))
    }

    fn product(&self, code: ProductCode) -> Result<&Product> {
        self.products
            .get(&code)
            .ok_or(InventoryError::ProductNotFound(code))
    }

    fn recipe_for(&self, code: ProductCode) -> Vec<RecipeLine> {
        self.recipe_lines
            .values()
            .filter(|line| line.product_code == code)
            .cloned()
            .collect()
    }

    fn with_recipe(&self, product: &Product) -> ProductWithRecipe {
        ProductWithRecipe {
            product: product.clone(),
            recipe: self.recipe_for(product.code),
        }
    }

    fn ensure_unique_name(&self, name: &str, except: Option<MaterialCode>) -> Result<()> {
        let taken = self
            .materials
            .values()
            .any(|m| m.name == name && Some(m.code) != except);
        if taken {
            return Err(InventoryError::DuplicateMaterialName(name.to_string()));
        }
        Ok(())
    }

    fn is_material_referenced(&self, code: MaterialCode) -> bool {
        self.recipe_lines
            .values()
            .any(|line| line.raw_material_code == code)
    }

    fn insert_recipe_line(
        &mut self,
        product_code: ProductCode,
        raw_material_code: MaterialCode,
        quantity_needed: Decimal,
    ) -> RecipeLine {
        self.next_recipe_line_id += 1;
        let line = RecipeLine::new(
            RecipeLineId(self.next_recipe_line_id),
            product_code,
            raw_material_code,
            quantity_needed,
        );
        self.recipe_lines.insert(line.id, line.clone());
        line
    }
}

/// 記憶體內庫存資料庫
///
/// 所有讀寫共用一把讀寫鎖；[`SnapshotLoader::load_snapshot`] 在單一讀鎖內
/// 組裝原料、產品與配方，快照不會夾雜進行中的寫入。
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========== 原料 ==========

    /// 新增原料
    pub fn create_raw_material(&self, name: &str, stock_quantity: Decimal) -> Result<RawMaterial> {
        let mut state = self.write();

        let code = MaterialCode(state.next_material_code + 1);
        let material = RawMaterial::new(code, name.trim(), stock_quantity);
        material.validate()?;
        state.ensure_unique_name(&material.name, None)?;

        state.next_material_code = code.value();
        state.materials.insert(code, material.clone());
        state.changes.mark_material(code);

        tracing::info!("新增原料 {} ({})，庫存 {}", code, material.name, stock_quantity);
        Ok(material)
    }

    /// 查詢原料
    pub fn get_raw_material(&self, code: MaterialCode) -> Result<RawMaterial> {
        self.read().material(code).cloned()
    }

    /// 列出全部原料（依代碼排序）
    pub fn list_raw_materials(&self) -> Vec<RawMaterial> {
        self.read().materials.values().cloned().collect()
    }

    /// 更新原料名稱與庫存
    pub fn update_raw_material(
        &self,
        code: MaterialCode,
        name: &str,
        stock_quantity: Decimal,
    ) -> Result<RawMaterial> {
        let mut state = self.write();
        state.material(code)?;

        let updated = RawMaterial::new(code, name.trim(), stock_quantity);
        updated.validate()?;
        state.ensure_unique_name(&updated.name, Some(code))?;

        state.materials.insert(code, updated.clone());
        state.changes.mark_material(code);

        tracing::debug!("更新原料 {}，庫存 {}", code, stock_quantity);
        Ok(updated)
    }

    /// 調整庫存（正數入庫，負數出庫），結果不可為負
    pub fn adjust_stock(&self, code: MaterialCode, delta: Decimal) -> Result<RawMaterial> {
        let mut state = self.write();
        let current = state.material(code)?.stock_quantity;

        let adjusted = current
            .checked_add(delta)
            .ok_or_else(|| InventoryError::Validation(format!("原料 {} 庫存溢位", code)))?;
        if adjusted < Decimal::ZERO {
            return Err(InventoryError::InsufficientStock {
                code,
                requested: -delta,
                available: current,
            });
        }

        let material = state
            .materials
            .get_mut(&code)
            .ok_or(InventoryError::RawMaterialNotFound(code))?;
        material.stock_quantity = adjusted;
        let material = material.clone();
        state.changes.mark_material(code);

        tracing::debug!("調整原料 {} 庫存: {} → {}", code, current, adjusted);
        Ok(material)
    }

    /// 刪除原料（仍被配方引用時拒絕）
    pub fn delete_raw_material(&self, code: MaterialCode) -> Result<()> {
        let mut state = self.write();
        state.material(code)?;

        if state.is_material_referenced(code) {
            return Err(InventoryError::MaterialInUse(code));
        }

        state.materials.remove(&code);
        state.changes.mark_material(code);

        tracing::info!("刪除原料 {}", code);
        Ok(())
    }

    // ========== 產品 ==========

    /// 新增產品及其配方（至少一項原料）
    pub fn create_product(
        &self,
        name: &str,
        price: Decimal,
        recipe: &[(MaterialCode, Decimal)],
    ) -> Result<ProductWithRecipe> {
        if recipe.is_empty() {
            return Err(InventoryError::EmptyRecipe);
        }

        let mut state = self.write();

        let code = ProductCode(state.next_product_code + 1);
        let product = Product::new(code, name.trim(), price);
        product.validate()?;

        // 先驗證全部明細，避免留下不完整的產品
        for (material, quantity_needed) in recipe {
            state.material(*material)?;
            if *quantity_needed <= Decimal::ZERO {
                return Err(InventoryError::Validation(format!(
                    "原料 {} 用量必須大於零: {}",
                    material, quantity_needed
                )));
            }
        }

        state.next_product_code = code.value();
        state.products.insert(code, product.clone());
        for (material, quantity_needed) in recipe {
            state.insert_recipe_line(code, *material, *quantity_needed);
        }
        state.changes.mark_product(code);

        tracing::info!(
            "新增產品 {} ({})，售價 {}，配方 {} 項",
            code,
            product.name,
            price,
            recipe.len()
        );
        Ok(state.with_recipe(&product))
    }

    /// 查詢產品及配方
    pub fn get_product(&self, code: ProductCode) -> Result<ProductWithRecipe> {
        let state = self.read();
        let product = state.product(code)?;
        Ok(state.with_recipe(product))
    }

    /// 列出全部產品及配方（依代碼排序）
    pub fn list_products(&self) -> Vec<ProductWithRecipe> {
        let state = self.read();
        state
            .products
            .values()
            .map(|p| state.with_recipe(p))
            .collect()
    }

    /// 依售價遞減列出產品（同價依代碼）
    pub fn list_products_by_price_desc(&self) -> PriceSortedProducts {
        PriceSortedProducts::sort_by_price(self.read().products.values().cloned().collect())
    }

    /// 更新產品名稱與售價（配方不變）
    pub fn update_product(
        &self,
        code: ProductCode,
        name: &str,
        price: Decimal,
    ) -> Result<ProductWithRecipe> {
        let mut state = self.write();
        state.product(code)?;

        let updated = Product::new(code, name.trim(), price);
        updated.validate()?;

        state.products.insert(code, updated.clone());
        state.changes.mark_product(code);

        tracing::debug!("更新產品 {}，售價 {}", code, price);
        Ok(state.with_recipe(&updated))
    }

    /// 刪除產品及其配方
    pub fn delete_product(&self, code: ProductCode) -> Result<()> {
        let mut state = self.write();
        state.product(code)?;

        state.recipe_lines.retain(|_, line| line.product_code != code);
        state.products.remove(&code);
        state.changes.mark_product(code);

        tracing::info!("刪除產品 {} 及其配方", code);
        Ok(())
    }

    // ========== 配方 ==========

    /// 列出產品的配方明細
    pub fn recipe_lines_for(&self, product_code: ProductCode) -> Vec<RecipeLine> {
        self.read().recipe_for(product_code)
    }

    /// 新增配方明細（產品與原料都必須存在）
    pub fn add_recipe_line(
        &self,
        product_code: ProductCode,
        raw_material_code: MaterialCode,
        quantity_needed: Decimal,
    ) -> Result<RecipeLine> {
        let mut state = self.write();
        state.product(product_code)?;
        state.material(raw_material_code)?;

        let candidate = RecipeLine::new(
            RecipeLineId(state.next_recipe_line_id + 1),
            product_code,
            raw_material_code,
            quantity_needed,
        );
        candidate.validate()?;

        let line = state.insert_recipe_line(product_code, raw_material_code, quantity_needed);
        state.changes.mark_product(product_code);

        tracing::debug!(
            "產品 {} 新增配方明細 {}：原料 {} × {}",
            product_code,
            line.id,
            raw_material_code,
            quantity_needed
        );
        Ok(line)
    }

    /// 更新配方明細用量
    pub fn update_recipe_quantity(
        &self,
        id: RecipeLineId,
        quantity_needed: Decimal,
    ) -> Result<RecipeLine> {
        let mut state = self.write();

        let line = state
            .recipe_lines
            .get_mut(&id)
            .ok_or(InventoryError::RecipeLineNotFound(id))?;
        let updated = RecipeLine {
            quantity_needed,
            ..line.clone()
        };
        updated.validate()?;
        *line = updated.clone();

        state.changes.mark_product(updated.product_code);
        Ok(updated)
    }

    /// 移除配方明細
    pub fn remove_recipe_line(&self, id: RecipeLineId) -> Result<()> {
        let mut state = self.write();

        let line = state
            .recipe_lines
            .remove(&id)
            .ok_or(InventoryError::RecipeLineNotFound(id))?;
        state.changes.mark_product(line.product_code);

        tracing::debug!("移除配方明細 {}（產品 {}）", id, line.product_code);
        Ok(())
    }

    // ========== 變更追蹤 ==========

    /// 目前資料版本
    pub fn revision(&self) -> u64 {
        self.read().changes.revision()
    }

    /// 快照版本之後是否有寫入
    pub fn is_stale(&self, snapshot: &InventorySnapshot) -> bool {
        self.revision() != snapshot.revision
    }

    /// 取出並清除未確認的變更
    pub fn take_changes(&self) -> ChangeSet {
        self.write().changes.take_pending()
    }
}

impl SnapshotLoader for InMemoryInventoryStore {
    fn load_snapshot(&self) -> Result<InventorySnapshot> {
        let state = self.read();

        let snapshot = InventorySnapshot::new(
            state.materials.values().cloned().collect(),
            state.products.values().cloned().collect(),
            state.recipe_lines.values().cloned(),
        )
        .with_revision(state.changes.revision());

        tracing::debug!(
            "載入快照：版本 {}，原料 {} 筆，產品 {} 筆，配方明細 {} 筆",
            snapshot.revision,
            snapshot.materials.len(),
            snapshot.products.len(),
            snapshot.recipes.line_count()
        );
        Ok(snapshot)
    }
}
