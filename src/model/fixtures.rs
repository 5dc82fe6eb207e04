// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

use super::color_scale::{ColorScale, ScaleRange};
use super::data_point::{DashboardModel, DataPoint, DataPointRow};
use super::ids::FieldId;
use super::source::SourceField;
use super::unit::Unit;

fn fid(value: &str) -> FieldId {
    FieldId::new(value).expect("field id")
}

pub(crate) fn source_fields_basic() -> Vec<SourceField> {
    vec![
        SourceField::new(
            "True Airspeed",
            fid("tas"),
            Unit::MetersPerSecond,
            Unit::MetersPerSecond.convertible_units(),
        ),
        SourceField::new(
            "Altitude",
            fid("altitude"),
            Unit::Meters,
            Unit::Meters.convertible_units(),
        ),
        SourceField::new(
            "Fuel Mass",
            fid("fuel.total"),
            Unit::Kilograms,
            Unit::Kilograms.convertible_units(),
        ),
        SourceField::new(
            "Heading",
            fid("heading"),
            Unit::Radians,
            Unit::Radians.convertible_units(),
        ),
    ]
}

/// Two closed ranges sharing a boundary, no trailing placeholder.
pub(crate) fn scale_two_closed_ranges() -> ColorScale {
    ColorScale::from_ranges(vec![
        ScaleRange::with_bounds(Some(0.0), Some(50.0), "#00FF00"),
        ScaleRange::with_bounds(Some(50.0), Some(100.0), "#FF0000"),
    ])
}

pub(crate) fn dashboard_two_rows() -> DashboardModel {
    let fields = source_fields_basic();

    let mut tas = DataPoint::from_field(&fields[0]);
    tas.set_color_scale(scale_two_closed_ranges());
    let altitude = DataPoint::from_field(&fields[1]);
    let fuel = DataPoint::from_field(&fields[2]);

    DashboardModel::from_rows(vec![
        DataPointRow::from_points(vec![tas, altitude]),
        DataPointRow::from_points(vec![fuel]),
    ])
}
