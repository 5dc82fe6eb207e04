// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Mutation operations for the dashboard model.
//!
//! Operations are applied in batches with optimistic concurrency (revision
//! checks) and are atomic: a failing op leaves the model untouched. The
//! catalog travels as an explicit argument; every op that binds a field or
//! picks a unit resolves against it.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::Catalog;
use crate::model::{ColorScale, DashboardModel, DataPoint, DataPointRow, FieldId, SourceField, Unit};

/// Longest display name a user may type, in characters.
pub const DISPLAY_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOp {
    /// New row holding one data point bound to `field_id`.
    AddRow {
        field_id: FieldId,
    },
    AddDataPoint {
        row: usize,
        field_id: FieldId,
    },
    RemoveRow {
        row: usize,
    },
    /// Removes the point; an emptied row stays in place.
    RemoveDataPoint {
        row: usize,
        col: usize,
    },
    /// `to` is the row's final index.
    MoveRow {
        from: usize,
        to: usize,
    },
    /// Within or across rows; `to_col` is the final index in the target row.
    MoveDataPoint {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },
    SetDisplayName {
        row: usize,
        col: usize,
        display_name: String,
    },
    /// Rebinds the point: display name follows the new field, the output
    /// unit is kept when still available and reset to the field's default
    /// otherwise.
    SetSourceField {
        row: usize,
        col: usize,
        field_id: FieldId,
    },
    SetOutputUnit {
        row: usize,
        col: usize,
        unit: Unit,
    },
    SetColorScale {
        row: usize,
        col: usize,
        color_scale: ColorScale,
    },
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    RowNotFound { row: usize },
    DataPointNotFound { row: usize, col: usize },
    RowLimitReached { max: usize },
    RowFull { row: usize, max: usize },
    InvalidMoveTarget { index: usize, len: usize },
    UnknownField { field_id: FieldId },
    UnitNotAvailable { field_id: FieldId, unit: Unit },
    InvalidDisplayName { display_name: String, reason: DisplayNameError },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { base_rev, current_rev } => {
                write!(f, "stale base_rev (base_rev={base_rev}, current_rev={current_rev})")
            }
            Self::RowNotFound { row } => write!(f, "row not found (row={row})"),
            Self::DataPointNotFound { row, col } => {
                write!(f, "data point not found (row={row}, col={col})")
            }
            Self::RowLimitReached { max } => write!(f, "row limit reached (max={max})"),
            Self::RowFull { row, max } => write!(f, "row is full (row={row}, max={max})"),
            Self::InvalidMoveTarget { index, len } => {
                write!(f, "invalid move target (index={index}, len={len})")
            }
            Self::UnknownField { field_id } => {
                write!(f, "field not in catalog (field_id={field_id})")
            }
            Self::UnitNotAvailable { field_id, unit } => {
                write!(f, "unit not available for field (field_id={field_id}, unit={unit})")
            }
            Self::InvalidDisplayName { display_name, reason } => {
                write!(f, "invalid display name '{display_name}': {reason}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayNameError {
    Empty,
    TooLong { len: usize, max: usize },
    ForbiddenCharacters,
}

impl fmt::Display for DisplayNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("must not be empty"),
            Self::TooLong { len, max } => write!(f, "too long (len={len}, max={max})"),
            Self::ForbiddenCharacters => {
                f.write_str("only letters, digits, spaces, '.', '(' and ')' are allowed")
            }
        }
    }
}

impl std::error::Error for DisplayNameError {}

/// Checks the display-name rule used by [`DashboardOp::SetDisplayName`].
/// Exposed so form hosts can validate while the user types.
pub fn validate_display_name(display_name: &str) -> Result<(), DisplayNameError> {
    if display_name.is_empty() {
        return Err(DisplayNameError::Empty);
    }
    let len = display_name.chars().count();
    if len > DISPLAY_NAME_MAX_LEN {
        return Err(DisplayNameError::TooLong {
            len,
            max: DISPLAY_NAME_MAX_LEN,
        });
    }
    if !display_name_regex().is_match(display_name) {
        return Err(DisplayNameError::ForbiddenCharacters);
    }
    Ok(())
}

fn display_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\w\s.()]+$").expect("static display name pattern"))
}

/// Applies `ops` in order against `model`, whole batch or nothing.
///
/// `base_rev` must match the model's current revision; on success the
/// revision is bumped once for the batch. An empty batch is a no-op that
/// does not bump.
pub fn apply_ops(
    model: &mut DashboardModel,
    catalog: &Catalog,
    base_rev: u64,
    ops: &[DashboardOp],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = model.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict { base_rev, current_rev });
    }

    if ops.is_empty() {
        return Ok(ApplyResult { new_rev: current_rev, applied: 0 });
    }

    let mut staged = model.clone();
    for op in ops {
        apply_op(&mut staged, catalog, op)?;
    }
    staged.bump_rev();

    let new_rev = staged.rev();
    *model = staged;

    Ok(ApplyResult { new_rev, applied: ops.len() })
}

fn apply_op(
    model: &mut DashboardModel,
    catalog: &Catalog,
    op: &DashboardOp,
) -> Result<(), ApplyError> {
    match op {
        DashboardOp::AddRow { field_id } => apply_add_row(model, catalog, field_id),
        DashboardOp::AddDataPoint { row, field_id } => {
            apply_add_data_point(model, catalog, *row, field_id)
        }
        DashboardOp::RemoveRow { row } => apply_remove_row(model, *row),
        DashboardOp::RemoveDataPoint { row, col } => apply_remove_data_point(model, *row, *col),
        DashboardOp::MoveRow { from, to } => apply_move_row(model, *from, *to),
        DashboardOp::MoveDataPoint {
            from_row,
            from_col,
            to_row,
            to_col,
        } => apply_move_data_point(model, *from_row, *from_col, *to_row, *to_col),
        DashboardOp::SetDisplayName {
            row,
            col,
            display_name,
        } => apply_set_display_name(model, *row, *col, display_name),
        DashboardOp::SetSourceField { row, col, field_id } => {
            apply_set_source_field(model, catalog, *row, *col, field_id)
        }
        DashboardOp::SetOutputUnit { row, col, unit } => {
            apply_set_output_unit(model, catalog, *row, *col, *unit)
        }
        DashboardOp::SetColorScale {
            row,
            col,
            color_scale,
        } => apply_set_color_scale(model, *row, *col, color_scale),
        DashboardOp::Clear => {
            model.rows_mut().clear();
            Ok(())
        }
    }
}

// Extracted op-application implementation.
include!("ops_impl.rs");
