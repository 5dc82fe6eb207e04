// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG) plus the criterion/pprof
// configuration used by every bench target.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

use pylot_dash::catalog::Catalog;
use pylot_dash::model::{
    ColorScale, DashboardModel, DataPoint, DataPointRow, FieldId, ScaleRange, SourceField, Unit,
};
use pylot_dash::ops::DashboardOp;
use pylot_dash::scale::ScaleEditor;

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let frequency = env_or("PROFILE_FREQ", 100i32).clamp(1, 1000);
    let sample_size = env_or("BENCH_SAMPLE_SIZE", 60usize).clamp(10, 200);
    let warmup_secs = env_or("BENCH_WARMUP_SECS", 3u64).clamp(1, 60);
    let measurement_secs = env_or("BENCH_MEASUREMENT_SECS", 5u64).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}

const SCALE_COLORS: [&str; 4] = ["#00FF00", "#FFFF00", "#FFA500", "#FF0000"];

const FIELD_UNITS: [Unit; 4] =
    [Unit::MetersPerSecond, Unit::Meters, Unit::Kilograms, Unit::Radians];

fn field_id(idx: usize) -> FieldId {
    FieldId::new(format!("bench.field_{idx:03}")).expect("valid field id")
}

/// Contiguous closed ranges `[0,10) [10,20) ..` sharing boundaries, colors
/// cycling through a small palette. Fully valid by construction.
pub fn contiguous_scale(ranges: usize) -> ColorScale {
    let mut out = Vec::with_capacity(ranges);
    for idx in 0..ranges {
        out.push(ScaleRange::with_bounds(
            Some((idx * 10) as f64),
            Some(((idx + 1) * 10) as f64),
            SCALE_COLORS[idx % SCALE_COLORS.len()],
        ));
    }
    ColorScale::from_ranges(out)
}

/// Catalog of generated fields cycling through a few default units, with
/// availability derived from the conversion table.
pub fn catalog(fields: usize) -> Catalog {
    let fields = (0..fields)
        .map(|idx| {
            let unit = FIELD_UNITS[idx % FIELD_UNITS.len()];
            SourceField::new(
                format!("Bench Field {idx:03}"),
                field_id(idx),
                unit,
                unit.convertible_units(),
            )
        })
        .collect();
    Catalog::from_fields(fields).expect("valid bench catalog")
}

/// Grid of `rows` x `cols` tiles bound round-robin to the catalog's fields.
pub fn dashboard(catalog: &Catalog, rows: usize, cols: usize) -> DashboardModel {
    let fields = catalog.fields();
    assert!(!fields.is_empty(), "bench catalog must not be empty");

    let mut next = 0usize;
    let mut grid = Vec::with_capacity(rows);
    for _ in 0..rows {
        let mut points = Vec::with_capacity(cols);
        for _ in 0..cols {
            points.push(DataPoint::from_field(&fields[next % fields.len()]));
            next += 1;
        }
        grid.push(DataPointRow::from_points(points));
    }
    DashboardModel::from_rows(grid)
}

/// Deterministic batch of rename/retune/scale edits. These ops never move a
/// tile, so the unit picked for each position stays valid for any `count`.
pub fn tile_edit_ops(model: &DashboardModel, catalog: &Catalog, count: usize) -> Vec<DashboardOp> {
    assert!(!model.is_empty(), "grid fixture must not be empty");

    let scale = contiguous_scale(3);
    let mut ops = Vec::with_capacity(count);
    for idx in 0..count {
        let row = idx % model.rows().len();
        let row_len = model.rows()[row].len();
        let col = (idx / model.rows().len()) % row_len;
        let op = match idx % 3 {
            0 => DashboardOp::SetDisplayName { row, col, display_name: format!("Tile {idx:04}") },
            1 => {
                let point = &model.rows()[row].data_points()[col];
                let field = catalog.field(point.field_id()).expect("bench field in catalog");
                let units = field.available_units();
                DashboardOp::SetOutputUnit { row, col, unit: units[idx % units.len()] }
            }
            _ => DashboardOp::SetColorScale { row, col, color_scale: scale.clone() },
        };
        ops.push(op);
    }
    ops
}

/// Deterministic batch of row and within-row moves. Lengths never change
/// under these ops, so every index stays valid for any `count`.
pub fn shuffle_ops(model: &DashboardModel, count: usize) -> Vec<DashboardOp> {
    let rows = model.rows().len();
    assert!(rows >= 2, "shuffle fixture needs at least two rows");

    let mut ops = Vec::with_capacity(count);
    for idx in 0..count {
        let row = idx % rows;
        let row_len = model.rows()[row].len();
        let op = if idx % 2 == 0 && row_len >= 2 {
            let col = idx % row_len;
            DashboardOp::MoveDataPoint {
                from_row: row,
                from_col: col,
                to_row: row,
                to_col: (col + 1) % row_len,
            }
        } else {
            DashboardOp::MoveRow { from: row, to: (row + 1) % rows }
        };
        ops.push(op);
    }
    ops
}

pub fn checksum_scale(scale: &ColorScale) -> u64 {
    let mut acc = 0u64;
    for range in scale.ranges() {
        acc = acc.wrapping_mul(131).wrapping_add(range.lower().map_or(0, f64::to_bits));
        acc = acc.wrapping_mul(131).wrapping_add(range.upper().map_or(0, f64::to_bits));
        acc = acc.wrapping_mul(131).wrapping_add(range.color().len() as u64);
    }
    acc
}

pub fn checksum_editor(editor: &ScaleEditor) -> u64 {
    let mut acc = checksum_scale(editor.scale());
    for idx in 0..editor.range_count() {
        if let Some(validation) = editor.validation(idx) {
            acc = acc.wrapping_mul(131).wrapping_add(validation.lower_errors().len() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(validation.upper_errors().len() as u64);
        }
    }
    acc
}

pub fn checksum_model(model: &DashboardModel) -> u64 {
    let mut acc = model.rev();
    for row in model.rows() {
        acc = acc.wrapping_mul(131).wrapping_add(row.len() as u64);
        for point in row.data_points() {
            acc = acc.wrapping_mul(131).wrapping_add(point.display_name().len() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(point.output_unit() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(point.color_scale().ranges().len() as u64);
        }
    }
    acc
}

pub mod scale_case {
    use super::ColorScale;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        Large,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::Large => "large",
            }
        }

        pub const fn ranges(self) -> usize {
            match self {
                Self::Small => 4,
                Self::Medium => 32,
                Self::Large => 256,
            }
        }
    }

    pub fn fixture(case: Case) -> ColorScale {
        super::contiguous_scale(case.ranges())
    }
}

pub mod grid_case {
    use super::{Catalog, DashboardModel};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Full,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Full => "full",
            }
        }

        pub const fn shape(self) -> (usize, usize) {
            match self {
                Self::Small => (3, 2),
                Self::Full => (10, 6),
            }
        }
    }

    pub fn fixture(catalog: &Catalog, case: Case) -> DashboardModel {
        let (rows, cols) = case.shape();
        super::dashboard(catalog, rows, cols)
    }
}
