// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

use std::fmt;

use super::color_scale::ColorScale;
use super::ids::FieldId;
use super::source::SourceField;
use super::unit::Unit;

/// One dashboard tile: a telemetry field with a user-facing name, the unit
/// values are converted to, and an optional color scale (all-empty scale
/// means none is configured).
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    display_name: String,
    field_id: FieldId,
    output_unit: Unit,
    color_scale: ColorScale,
}

impl DataPoint {
    pub fn new(display_name: impl Into<String>, field_id: FieldId, output_unit: Unit) -> Self {
        Self {
            display_name: display_name.into(),
            field_id,
            output_unit,
            color_scale: ColorScale::new(),
        }
    }

    /// New data point bound to `field`, taking over its display name and
    /// default unit.
    pub fn from_field(field: &SourceField) -> Self {
        Self::new(
            field.display_name().to_owned(),
            field.field_id().clone(),
            field.default_unit(),
        )
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    pub fn output_unit(&self) -> Unit {
        self.output_unit
    }

    pub fn color_scale(&self) -> &ColorScale {
        &self.color_scale
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    pub fn set_field_id(&mut self, field_id: FieldId) {
        self.field_id = field_id;
    }

    pub fn set_output_unit(&mut self, output_unit: Unit) {
        self.output_unit = output_unit;
    }

    pub fn set_color_scale(&mut self, color_scale: ColorScale) {
        self.color_scale = color_scale;
    }
}

/// One horizontal row of data points. Rows may be empty while editing;
/// import drops them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataPointRow {
    data_points: Vec<DataPoint>,
}

impl DataPointRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(data_points: Vec<DataPoint>) -> Self {
        Self { data_points }
    }

    pub fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    pub(crate) fn data_points_mut(&mut self) -> &mut Vec<DataPoint> {
        &mut self.data_points
    }

    pub fn len(&self) -> usize {
        self.data_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}

/// Position of a data point inside the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRef {
    row: usize,
    col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// The whole dashboard being edited: rows of data points plus a revision
/// counter bumped by every successfully applied op batch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardModel {
    rows: Vec<DataPointRow>,
    rev: u64,
}

impl DashboardModel {
    /// Hard cap on dashboard rows.
    pub const MAX_ROWS: usize = 10;
    /// Hard cap on data points within one row.
    pub const MAX_DATA_POINTS_PER_ROW: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<DataPointRow>) -> Self {
        Self { rows, rev: 0 }
    }

    pub fn rows(&self) -> &[DataPointRow] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<DataPointRow> {
        &mut self.rows
    }

    pub fn row(&self, index: usize) -> Option<&DataPointRow> {
        self.rows.get(index)
    }

    pub fn data_point(&self, cell: CellRef) -> Option<&DataPoint> {
        self.rows.get(cell.row())?.data_points().get(cell.col())
    }

    pub(crate) fn data_point_mut(&mut self, cell: CellRef) -> Option<&mut DataPoint> {
        self.rows.get_mut(cell.row())?.data_points_mut().get_mut(cell.col())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }
}
