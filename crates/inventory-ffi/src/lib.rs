//! # Inventory FFI
//!
//! Python 綁定層（PyO3）

use pyo3::prelude::*;

pub mod convert;
pub mod python;

/// Python 模組註冊
#[pymodule]
fn inventory_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PySuggestionEngine>()?;
    m.add_class::<python::PySuggestionConfig>()?;
    Ok(())
}
