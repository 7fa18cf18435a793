//! 單一產品可生產數量計算

use inventory_core::{MaterialCode, RecipeLine, StockLedger};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 每單位產品對單一原料的合計用量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialRequirement {
    pub material: MaterialCode,
    pub per_unit: Decimal,
}

/// 可生產數量計算器
pub struct ProducibleCalculator;

impl ProducibleCalculator {
    /// 合併配方明細為每種原料的單位用量（保留首次出現順序）
    ///
    /// 任一明細用量 ≤ 0 時回傳 None：此產品無法經由該明細生產。
    pub fn requirements(lines: &[RecipeLine]) -> Option<Vec<MaterialRequirement>> {
        let mut requirements: Vec<MaterialRequirement> = Vec::with_capacity(lines.len());

        for line in lines {
            if !line.is_usable() {
                return None;
            }

            match requirements
                .iter_mut()
                .find(|r| r.material == line.raw_material_code)
            {
                Some(existing) => {
                    existing.per_unit = existing.per_unit.saturating_add(line.quantity_needed)
                }
                None => requirements.push(MaterialRequirement {
                    material: line.raw_material_code,
                    per_unit: line.quantity_needed,
                }),
            }
        }

        Some(requirements)
    }

    /// floor(available / per_unit)，保證 結果 × per_unit ≤ available
    pub fn possible_units(available: Decimal, per_unit: Decimal) -> u64 {
        if per_unit <= Decimal::ZERO || available <= Decimal::ZERO {
            return 0;
        }

        let mut units = match available.checked_div(per_unit) {
            Some(quotient) => quotient.floor().to_u64().unwrap_or(u64::MAX),
            None => u64::MAX,
        };

        // 十進位除法可能進位到下一個整數
        if units > 0 && per_unit.saturating_mul(Decimal::from(units)) > available {
            units -= 1;
        }

        units
    }

    /// 依目前虛擬庫存計算產品最大可生產數量（最受限原料決定）
    pub fn max_producible(lines: &[RecipeLine], stock: &StockLedger) -> u64 {
        match Self::requirements(lines) {
            Some(requirements) => Self::max_for_requirements(&requirements, stock),
            None => 0,
        }
    }

    /// 依合併後的用量計算最大可生產數量，無用量時為零
    pub fn max_for_requirements(requirements: &[MaterialRequirement], stock: &StockLedger) -> u64 {
        requirements
            .iter()
            .map(|r| Self::possible_units(stock.available(r.material), r.per_unit))
            .min()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{ProductCode, RecipeLineId};
    use rstest::rstest;

    fn line(id: u64, material: u64, qty: Decimal) -> RecipeLine {
        RecipeLine::new(RecipeLineId(id), ProductCode(1), MaterialCode(material), qty)
    }

    #[rstest]
    #[case(Decimal::from(10), Decimal::from(2), 5)]
    #[case(Decimal::from(10), Decimal::from(3), 3)]
    #[case(Decimal::new(5, 1), Decimal::ONE, 0)]
    #[case(Decimal::from(7), Decimal::new(25, 1), 2)]
    #[case(Decimal::ZERO, Decimal::ONE, 0)]
    #[case(Decimal::from(10), Decimal::ZERO, 0)]
    #[case(Decimal::from(10), Decimal::from(-2), 0)]
    #[case(Decimal::from(-4), Decimal::ONE, 0)]
    fn test_possible_units(#[case] available: Decimal, #[case] per_unit: Decimal, #[case] expected: u64) {
        assert_eq!(ProducibleCalculator::possible_units(available, per_unit), expected);
    }

    #[test]
    fn test_possible_units_never_overdraws() {
        // 1 / 3 的十進位表示會被截斷，乘回去不可超過可用量
        let per_unit = Decimal::ONE / Decimal::from(3);
        let units = ProducibleCalculator::possible_units(Decimal::ONE, per_unit);

        assert!(per_unit * Decimal::from(units) <= Decimal::ONE);
        assert!(units >= 2);
    }

    #[test]
    fn test_possible_units_saturates() {
        let units = ProducibleCalculator::possible_units(Decimal::MAX, Decimal::new(1, 10));
        assert_eq!(units, u64::MAX);
    }

    #[test]
    fn test_requirements_merge_same_material() {
        let lines = vec![
            line(1, 100, Decimal::from(2)),
            line(2, 200, Decimal::ONE),
            line(3, 100, Decimal::from(3)),
        ];

        let requirements = ProducibleCalculator::requirements(&lines).unwrap();
        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0].material, MaterialCode(100));
        assert_eq!(requirements[0].per_unit, Decimal::from(5));
        assert_eq!(requirements[1].material, MaterialCode(200));
    }

    #[test]
    fn test_requirements_reject_non_positive_line() {
        let lines = vec![line(1, 100, Decimal::from(2)), line(2, 200, Decimal::ZERO)];
        assert!(ProducibleCalculator::requirements(&lines).is_none());
    }

    #[test]
    fn test_max_producible_uses_bottleneck() {
        let stock = StockLedger::new()
            .with_quantity(MaterialCode(100), Decimal::from(100))
            .with_quantity(MaterialCode(200), Decimal::from(9));

        let lines = vec![line(1, 100, Decimal::from(4)), line(2, 200, Decimal::from(3))];
        assert_eq!(ProducibleCalculator::max_producible(&lines, &stock), 3);
    }

    #[test]
    fn test_max_producible_missing_material_is_zero() {
        let stock = StockLedger::new().with_quantity(MaterialCode(100), Decimal::from(100));
        let lines = vec![line(1, 100, Decimal::ONE), line(2, 999, Decimal::ONE)];

        assert_eq!(ProducibleCalculator::max_producible(&lines, &stock), 0);
    }

    #[test]
    fn test_max_producible_without_lines_is_zero() {
        assert_eq!(ProducibleCalculator::max_producible(&[], &StockLedger::new()), 0);
    }
}
