//! 實體代碼（整數句柄）

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// 取得原始數值
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_code!(
    /// 原料代碼（建立時分配，永不重用）
    MaterialCode
);

entity_code!(
    /// 產品代碼
    ProductCode
);

entity_code!(
    /// 配方明細ID
    RecipeLineId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display_and_order() {
        let a = MaterialCode::from(7);
        let b = MaterialCode(12);

        assert_eq!(a.to_string(), "7");
        assert!(a < b);
        assert_eq!(b.value(), 12);
    }

    #[test]
    fn test_code_serializes_as_plain_number() {
        let json = serde_json::to_string(&ProductCode(42)).unwrap();
        assert_eq!(json, "42");

        let code: RecipeLineId = serde_json::from_str("5").unwrap();
        assert_eq!(code, RecipeLineId(5));
    }
}
