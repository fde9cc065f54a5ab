//! Python bindings for the pairs-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import pairs_match as pm
//!
//! session = pm.PairsSession(seed=42)
//! session.start()
//!
//! kind, positions = session.flip(0)
//! kind, positions = session.flip(1)
//! print(session.moves, session.score, session.remaining)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// pairs_match: a pairs-matching card game engine.
#[pymodule]
fn pairs_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    Ok(())
}
