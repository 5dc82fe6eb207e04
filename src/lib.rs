// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Pylot Dash: configuration core for a flight-sim telemetry dashboard.
//!
//! Dashboard grid model, color-scale editing, batch ops with revision
//! checks, and the wire contracts shared with the editor front end and the
//! telemetry runtime.

pub mod api;
pub mod catalog;
pub mod model;
pub mod ops;
pub mod query;
pub mod scale;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
