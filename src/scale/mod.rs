// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Interactive color-scale editing.
//!
//! [`ScaleEditor`] owns the scale being edited plus one advisory
//! [`RangeValidation`] per range, held as parallel arrays indexed by
//! position. Neighbors are derived from index adjacency on demand, so there
//! is no cached previous/next state that could go stale. Change events are
//! queued only after every revalidation an operation triggers has completed.

use std::fmt;

use crate::model::{ColorScale, ScaleRange};

pub mod validate;


pub use validate::{validate_range, BoundError, RangeValidation};

/// Notification drained by the host after mutating operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleEvent {
    /// The scale changed in some way; re-read ranges and validations.
    ScaleChanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleEditError {
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for ScaleEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "range index out of bounds (index={index}, len={len})")
            }
        }
    }
}

impl std::error::Error for ScaleEditError {}

/// Editing session over one data point's color scale.
///
/// Bound and color edits always land in the scale; validation failures are
/// advisory and never roll an edit back. The collection is kept non-empty at
/// every mutation, and whenever an edit leaves the last range non-empty an
/// empty placeholder is appended so the user always has a blank row to type
/// into.
#[derive(Debug, Clone)]
pub struct ScaleEditor {
    scale: ColorScale,
    validations: Vec<RangeValidation>,
    events: Vec<ScaleEvent>,
}

impl ScaleEditor {
    pub fn new() -> Self {
        Self::from_scale(ColorScale::new())
    }

    /// Adopts an existing scale, seeding a placeholder if the scale has no
    /// ranges or ends in a non-empty one. Construction queues no events.
    pub fn from_scale(scale: ColorScale) -> Self {
        let mut editor = Self {
            scale,
            validations: Vec::new(),
            events: Vec::new(),
        };
        if editor.scale.ranges().is_empty() {
            editor.scale.ranges_mut().push(ScaleRange::new());
        }
        editor
            .validations
            .resize(editor.scale.ranges().len(), RangeValidation::default());
        editor.append_placeholder_quietly();
        editor.revalidate_all();
        editor
    }

    pub fn range_count(&self) -> usize {
        self.scale.ranges().len()
    }

    pub fn range(&self, index: usize) -> Option<&ScaleRange> {
        self.scale.ranges().get(index)
    }

    pub fn validation(&self, index: usize) -> Option<&RangeValidation> {
        self.validations.get(index)
    }

    pub fn is_valid(&self) -> bool {
        self.validations.iter().all(RangeValidation::is_valid)
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Hands the edited scale back, trailing placeholder included (an empty
    /// range is inert for rendering and emptiness checks).
    pub fn into_scale(self) -> ColorScale {
        self.scale
    }

    /// Removes and returns all queued events.
    pub fn drain_events(&mut self) -> Vec<ScaleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn set_lower_bound(
        &mut self,
        index: usize,
        lower: Option<f64>,
    ) -> Result<(), ScaleEditError> {
        self.range_mut(index)?.set_lower(lower);
        self.range_changed(index);
        Ok(())
    }

    pub fn set_upper_bound(
        &mut self,
        index: usize,
        upper: Option<f64>,
    ) -> Result<(), ScaleEditError> {
        self.range_mut(index)?.set_upper(upper);
        self.range_changed(index);
        Ok(())
    }

    pub fn set_color(
        &mut self,
        index: usize,
        color: impl Into<String>,
    ) -> Result<(), ScaleEditError> {
        self.range_mut(index)?.set_color(color);
        self.range_changed(index);
        Ok(())
    }

    /// Appends an empty placeholder iff the last range is non-empty.
    /// Idempotent; returns whether a range was appended. Queues an event
    /// only when it did append.
    pub fn append_placeholder_if_needed(&mut self) -> bool {
        if self.append_placeholder_quietly() {
            self.events.push(ScaleEvent::ScaleChanged);
            return true;
        }
        false
    }

    /// Removes the range at `index` and revalidates the two ranges that
    /// became adjacent across the seam. Removing the final remaining range
    /// leaves a fresh placeholder, never an empty collection. No placeholder
    /// is re-appended otherwise; the next edit takes care of that.
    pub fn remove_range(&mut self, index: usize) -> Result<(), ScaleEditError> {
        let len = self.scale.ranges().len();
        if index >= len {
            return Err(ScaleEditError::IndexOutOfBounds { index, len });
        }

        self.scale.ranges_mut().remove(index);
        self.validations.remove(index);

        if self.scale.ranges().is_empty() {
            self.scale.ranges_mut().push(ScaleRange::new());
            self.validations.push(RangeValidation::default());
        }

        if index > 0 {
            self.revalidate(index - 1);
        }
        self.revalidate(index);

        self.events.push(ScaleEvent::ScaleChanged);
        Ok(())
    }

    /// Resets to a single empty placeholder and queues exactly one event.
    pub fn clear(&mut self) {
        self.scale = ColorScale::new();
        self.validations = vec![RangeValidation::default()];
        self.revalidate_all();
        self.events.push(ScaleEvent::ScaleChanged);
    }

    /// Replaces the whole collection with a deep copy of `source`, then runs
    /// placeholder maintenance and a full revalidation. One event.
    pub fn copy_from(&mut self, source: &ColorScale) {
        self.scale = source.clone();
        if self.scale.ranges().is_empty() {
            self.scale.ranges_mut().push(ScaleRange::new());
        }
        self.validations = vec![RangeValidation::default(); self.scale.ranges().len()];
        self.append_placeholder_quietly();
        self.revalidate_all();
        self.events.push(ScaleEvent::ScaleChanged);
    }

    fn range_mut(&mut self, index: usize) -> Result<&mut ScaleRange, ScaleEditError> {
        let len = self.scale.ranges().len();
        self.scale
            .ranges_mut()
            .get_mut(index)
            .ok_or(ScaleEditError::IndexOutOfBounds { index, len })
    }

    /// Post-edit flow: placeholder maintenance first, then the edited range
    /// and both neighbors are revalidated, then the event is queued.
    fn range_changed(&mut self, index: usize) {
        self.append_placeholder_quietly();
        if index > 0 {
            self.revalidate(index - 1);
        }
        self.revalidate(index);
        self.revalidate(index + 1);
        self.events.push(ScaleEvent::ScaleChanged);
    }

    fn append_placeholder_quietly(&mut self) -> bool {
        let needs = self
            .scale
            .ranges()
            .last()
            .map_or(true, |last| !last.is_empty());
        if !needs {
            return false;
        }
        self.scale.ranges_mut().push(ScaleRange::new());
        self.validations.push(RangeValidation::default());
        let last = self.scale.ranges().len() - 1;
        if last > 0 {
            self.revalidate(last - 1);
        }
        self.revalidate(last);
        true
    }

    /// Recomputes the validation for `index` from its current neighbors.
    /// Out-of-range indices are ignored so callers can probe seams blindly.
    fn revalidate(&mut self, index: usize) {
        let ranges = self.scale.ranges();
        let Some(range) = ranges.get(index) else {
            return;
        };
        let previous = index.checked_sub(1).and_then(|i| ranges.get(i));
        let next = ranges.get(index + 1);
        let validation = validate_range(range, previous, next);
        self.validations[index] = validation;
    }

    fn revalidate_all(&mut self) {
        for index in 0..self.scale.ranges().len() {
            self.revalidate(index);
        }
    }
}

impl Default for ScaleEditor {
    fn default() -> Self {
        Self::new()
    }
}
