// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! A dashboard holds rows of data points; each data point binds a telemetry
//! source field to a display name, an output unit, and a color scale.

pub mod color_scale;
pub mod data_point;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod source;
pub mod unit;

pub use color_scale::{ColorScale, ScaleRange};
pub use data_point::{CellRef, DashboardModel, DataPoint, DataPointRow};
pub use ids::{FieldId, IdError};
pub use source::SourceField;
pub use unit::{MissingConversion, ParseUnitError, Unit};
