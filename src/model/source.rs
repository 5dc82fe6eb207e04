// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

use super::ids::FieldId;
use super::unit::Unit;

/// Catalog entry describing one telemetry field the sim exposes.
///
/// The available-unit list is snapshot data shipped by the service; the
/// editor never recomputes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceField {
    display_name: String,
    field_id: FieldId,
    default_unit: Unit,
    available_units: Vec<Unit>,
}

impl SourceField {
    pub fn new(
        display_name: impl Into<String>,
        field_id: FieldId,
        default_unit: Unit,
        available_units: Vec<Unit>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            field_id,
            default_unit,
            available_units,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn field_id(&self) -> &FieldId {
        &self.field_id
    }

    pub fn default_unit(&self) -> Unit {
        self.default_unit
    }

    pub fn available_units(&self) -> &[Unit] {
        &self.available_units
    }

    pub fn has_unit(&self, unit: Unit) -> bool {
        self.available_units.contains(&unit)
    }
}

#[cfg(test)]
mod tests {
    use super::SourceField;
    use crate::model::{FieldId, Unit};

    #[test]
    fn has_unit_checks_the_available_list() {
        let field = SourceField::new(
            "True Airspeed",
            FieldId::new("tas").expect("id"),
            Unit::MetersPerSecond,
            Unit::MetersPerSecond.convertible_units(),
        );
        assert!(field.has_unit(Unit::Knots));
        assert!(!field.has_unit(Unit::Kilograms));
    }
}
