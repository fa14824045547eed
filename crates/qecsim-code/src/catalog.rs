use qecsim_core::{Nkd, QecError};

use crate::basic::{BasicCode, BasicCodeOptions};

/// The [5,1,3] perfect code.
pub fn five_qubit_code() -> Result<BasicCode, QecError> {
    BasicCode::with_options(
        &["XZZXI", "IXZZX", "XIXZZ", "ZXIXZ"],
        &["XXXXX"],
        &["ZZZZZ"],
        BasicCodeOptions::default()
            .with_nkd(Nkd::new(5, 1, Some(3)))
            .with_label("5-qubit"),
    )
}

/// The [7,1,3] Steane code.
pub fn steane_code() -> Result<BasicCode, QecError> {
    BasicCode::with_options(
        &[
            "IIIXXXX", "IXXIIXX", "XIXIXIX", "IIIZZZZ", "IZZIIZZ", "ZIZIZIZ",
        ],
        &["XXXXXXX"],
        &["ZZZZZZZ"],
        BasicCodeOptions::default()
            .with_nkd(Nkd::new(7, 1, Some(3)))
            .with_label("Steane"),
    )
}
