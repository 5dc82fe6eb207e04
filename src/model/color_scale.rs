// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

/// One entry of a color scale: an optional lower/upper bound pair and the
/// color rendered when a value falls inside it.
///
/// Bounds are optional independently; a range with only a lower bound is
/// open-ended upward, and vice versa. A range with neither bound is *empty*
/// (the trailing placeholder the scale editor maintains). Color never
/// affects emptiness.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRange {
    lower: Option<f64>,
    upper: Option<f64>,
    color: String,
}

impl ScaleRange {
    /// Color a fresh range starts with until the user picks one.
    pub const DEFAULT_COLOR: &'static str = "#FF0000";

    pub fn new() -> Self {
        Self {
            lower: None,
            upper: None,
            color: Self::DEFAULT_COLOR.to_owned(),
        }
    }

    pub fn with_bounds(lower: Option<f64>, upper: Option<f64>, color: impl Into<String>) -> Self {
        Self {
            lower,
            upper,
            color: color.into(),
        }
    }

    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_lower(&mut self, lower: Option<f64>) {
        self.lower = lower;
    }

    pub fn set_upper(&mut self, upper: Option<f64>) {
        self.upper = upper;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered list of [`ScaleRange`]s attached to one data point.
///
/// An all-empty scale means "no color scale configured"; deep copies come
/// from `Clone`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    ranges: Vec<ScaleRange>,
}

impl ColorScale {
    /// A fresh scale holds a single empty range.
    pub fn new() -> Self {
        Self {
            ranges: vec![ScaleRange::new()],
        }
    }

    pub fn from_ranges(ranges: Vec<ScaleRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ScaleRange] {
        &self.ranges
    }

    pub(crate) fn ranges_mut(&mut self) -> &mut Vec<ScaleRange> {
        &mut self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.iter().all(ScaleRange::is_empty)
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorScale, ScaleRange};

    #[test]
    fn fresh_range_is_empty_with_default_color() {
        let range = ScaleRange::new();
        assert!(range.is_empty());
        assert_eq!(range.color(), ScaleRange::DEFAULT_COLOR);
    }

    #[test]
    fn color_does_not_affect_emptiness() {
        let mut range = ScaleRange::new();
        range.set_color("#00FF00");
        assert!(range.is_empty());

        range.set_lower(Some(0.0));
        assert!(!range.is_empty());
    }

    #[test]
    fn fresh_scale_holds_one_empty_range() {
        let scale = ColorScale::new();
        assert_eq!(scale.ranges().len(), 1);
        assert!(scale.is_empty());
    }

    #[test]
    fn scale_with_any_bound_is_not_empty() {
        let scale = ColorScale::from_ranges(vec![
            ScaleRange::with_bounds(Some(0.0), Some(5.0), "#00FF00"),
            ScaleRange::new(),
        ]);
        assert!(!scale.is_empty());
    }
}
