//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameRng, SessionId, SystemClock};
use crate::deck::FlipOutcome;
use crate::history::InMemoryHistory;
use crate::session::{Session, SessionError};

fn to_py_err(err: SessionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a game session.
///
/// Uses the system clock and keeps finished records in memory.
#[pyclass(name = "PairsSession", unsendable)]
pub struct PySession {
    session: Session<SystemClock, InMemoryHistory>,
    history: InMemoryHistory,
}

#[pymethods]
impl PySession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for the deal
    /// - session_id: Host-assigned session identifier
    #[new]
    #[pyo3(signature = (seed = 42, session_id = 1))]
    fn new(seed: u64, session_id: u64) -> Self {
        let history = InMemoryHistory::new();
        let session = Session::new(
            SessionId::new(session_id),
            &mut GameRng::new(seed),
            SystemClock::new(),
            history.clone(),
        );
        Self { session, history }
    }

    fn start(&mut self) -> PyResult<()> {
        self.session.start().map_err(to_py_err)
    }

    fn pause(&mut self) -> PyResult<()> {
        self.session.pause().map_err(to_py_err)
    }

    fn resume(&mut self) -> PyResult<()> {
        self.session.resume().map_err(to_py_err)
    }

    fn abort(&mut self) -> PyResult<()> {
        self.session.abort().map_err(to_py_err)
    }

    /// Flip a card.
    ///
    /// Returns `("pending", [pos])`, `("matched", [a, b])` or
    /// `("mismatched", [a, b])`.
    fn flip(&mut self, position: usize) -> PyResult<(&'static str, Vec<usize>)> {
        let outcome = self.session.flip(position).map_err(to_py_err)?;
        Ok(match outcome {
            FlipOutcome::Pending { position } => ("pending", vec![position]),
            FlipOutcome::Matched { positions, .. } => ("matched", positions.to_vec()),
            FlipOutcome::Mismatched { positions, .. } => ("mismatched", positions.to_vec()),
        })
    }

    /// Rank at a position while it is face up, else None.
    fn rank_at(&self, position: usize) -> Option<u8> {
        self.session.rank_at(position).map(|r| r.get())
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[getter]
    fn score(&self) -> u8 {
        self.session.score()
    }

    #[getter]
    fn remaining(&self) -> usize {
        self.session.remaining()
    }

    #[getter]
    fn finished(&self) -> bool {
        self.session.is_finished()
    }

    #[getter]
    fn elapsed_ms(&self) -> u64 {
        self.session.elapsed_ms()
    }

    /// Recorded `(moves, score, elapsed_ms)` tuples.
    fn history(&self) -> Vec<(u32, u8, u64)> {
        self.history
            .snapshot()
            .iter()
            .map(|r| (r.moves, r.score, r.elapsed_ms))
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "PairsSession(id={}, state={:?}, moves={}, remaining={})",
            self.session.id().raw(),
            self.session.state(),
            self.session.moves(),
            self.session.remaining()
        )
    }
}
