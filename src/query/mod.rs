// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Read-only queries over the catalog and the dashboard model.
//!
//! These power the source picker and the copy-settings chooser; nothing in
//! here mutates state.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::model::{CellRef, DashboardModel, SourceField};

/// Minimum `rapidfuzz` ratio (0..=100) for a fuzzy hit.
const FUZZY_THRESHOLD: f64 = 55.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSearchMode {
    Substring,
    Fuzzy,
}

/// Finds catalog fields matching `needle` by display name or field id.
///
/// Matching is case-insensitive in both modes. Substring hits come back in
/// catalog order; fuzzy hits are ranked best-first with catalog order as the
/// tie break. A blank needle returns the whole catalog.
pub fn search_fields<'a>(
    catalog: &'a Catalog,
    needle: &str,
    mode: FieldSearchMode,
) -> Vec<&'a SourceField> {
    let needle = needle.trim();
    if needle.is_empty() {
        return catalog.fields().iter().collect();
    }

    match mode {
        FieldSearchMode::Substring => {
            let needle_lower = needle.to_lowercase();
            catalog
                .fields()
                .iter()
                .filter(|field| {
                    field.display_name().to_lowercase().contains(&needle_lower)
                        || field.field_id().as_str().to_lowercase().contains(&needle_lower)
                })
                .collect()
        }
        FieldSearchMode::Fuzzy => {
            let needle_lower = needle.to_lowercase();
            let mut scored: Vec<(usize, f64, &SourceField)> = catalog
                .fields()
                .iter()
                .enumerate()
                .filter_map(|(position, field)| {
                    let score = fuzzy_score(&needle_lower, field);
                    (score >= FUZZY_THRESHOLD).then_some((position, score, field))
                })
                .collect();
            scored.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.0.cmp(&b.0))
            });
            scored.into_iter().map(|(_, _, field)| field).collect()
        }
    }
}

fn fuzzy_score(needle_lower: &str, field: &SourceField) -> f64 {
    let name = field.display_name().to_lowercase();
    let id = field.field_id().as_str().to_lowercase();
    let name_ratio = rapidfuzz::fuzz::ratio(needle_lower.chars(), name.chars());
    let id_ratio = rapidfuzz::fuzz::ratio(needle_lower.chars(), id.chars());
    name_ratio.max(id_ratio)
}

/// Data points whose color scale could be copied onto `current`: everything
/// with a non-empty scale except `current` itself, in row-major order.
pub fn copy_candidates(model: &DashboardModel, current: CellRef) -> Vec<CellRef> {
    let mut candidates = Vec::new();
    for (row_index, row) in model.rows().iter().enumerate() {
        for (col_index, point) in row.data_points().iter().enumerate() {
            let cell = CellRef::new(row_index, col_index);
            if cell == current || point.color_scale().is_empty() {
                continue;
            }
            candidates.push(cell);
        }
    }
    candidates
}
