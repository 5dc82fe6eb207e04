// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Source catalog: the telemetry fields and units a dashboard can bind to.
//!
//! The catalog is an immutable snapshot built from a shipped
//! [`ApiSourceModel`]; the editor never recomputes availability on its own.
//! Ingest is strict, every inconsistency in the payload is a typed error.

use std::collections::BTreeMap;
use std::fmt;

use crate::api::types::{ApiSourceField, ApiSourceModel, ApiUnit};
use crate::model::{FieldId, IdError, SourceField, Unit};

/// Per-unit display data exactly as shipped by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDescriptor {
    unit: Unit,
    display_name: String,
    symbol: String,
}

impl UnitDescriptor {
    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Snapshot of the source model, indexed by field id, iteration in payload
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    fields: Vec<SourceField>,
    index: BTreeMap<FieldId, usize>,
    units: Vec<UnitDescriptor>,
}

impl Catalog {
    pub fn from_source_model(source: &ApiSourceModel) -> Result<Self, CatalogError> {
        let mut units = Vec::with_capacity(source.units.len());
        for api_unit in &source.units {
            let unit = parse_table_unit(&api_unit.unit_id)?;
            units.push(UnitDescriptor {
                unit,
                display_name: api_unit.display_name.clone(),
                symbol: api_unit.symbol.clone(),
            });
        }

        let mut fields = Vec::with_capacity(source.fields.len());
        for api_field in &source.fields {
            fields.push(parse_field(api_field)?);
        }

        Self::build(fields, units)
    }

    /// Builds a catalog from native fields, with canonical unit display
    /// data. The serving-side counterpart of [`from_source_model`].
    ///
    /// [`from_source_model`]: Catalog::from_source_model
    pub fn from_fields(fields: Vec<SourceField>) -> Result<Self, CatalogError> {
        Self::build(fields, canonical_unit_descriptors())
    }

    fn build(fields: Vec<SourceField>, units: Vec<UnitDescriptor>) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();
        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.field_id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateField {
                    field_id: field.field_id().clone(),
                });
            }
            if !field.has_unit(field.default_unit()) {
                return Err(CatalogError::DefaultUnitNotAvailable {
                    field_id: field.field_id().clone(),
                    unit: field.default_unit(),
                });
            }
        }
        Ok(Self {
            fields,
            index,
            units,
        })
    }

    pub fn field(&self, field_id: &FieldId) -> Option<&SourceField> {
        self.index
            .get(field_id)
            .and_then(|position| self.fields.get(*position))
    }

    pub fn fields(&self) -> &[SourceField] {
        &self.fields
    }

    pub fn unit_descriptor(&self, unit: Unit) -> Option<&UnitDescriptor> {
        self.units.iter().find(|descriptor| descriptor.unit == unit)
    }

    pub fn unit_descriptors(&self) -> &[UnitDescriptor] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Emits the shippable source model for `fields`.
///
/// Available units are derived from the conversion table (identity plus
/// every reachable unit), not taken from the input fields; the unit table
/// carries the canonical display names and symbols.
pub fn build_source_model(fields: &[SourceField]) -> ApiSourceModel {
    ApiSourceModel {
        units: Unit::ALL
            .into_iter()
            .map(|unit| ApiUnit {
                display_name: unit.display_name().to_owned(),
                unit_id: unit.as_str().to_owned(),
                symbol: unit.symbol().to_owned(),
            })
            .collect(),
        fields: fields
            .iter()
            .map(|field| ApiSourceField {
                display_name: field.display_name().to_owned(),
                field_id: field.field_id().to_string(),
                default_unit_id: field.default_unit().as_str().to_owned(),
                available_unit_ids: field
                    .default_unit()
                    .convertible_units()
                    .into_iter()
                    .map(|unit| unit.as_str().to_owned())
                    .collect(),
            })
            .collect(),
    }
}

fn canonical_unit_descriptors() -> Vec<UnitDescriptor> {
    Unit::ALL
        .into_iter()
        .map(|unit| UnitDescriptor {
            unit,
            display_name: unit.display_name().to_owned(),
            symbol: unit.symbol().to_owned(),
        })
        .collect()
}

fn parse_table_unit(unit_id: &str) -> Result<Unit, CatalogError> {
    unit_id.parse().map_err(|_| CatalogError::UnknownUnit {
        unit_id: unit_id.to_owned(),
    })
}

fn parse_field(api_field: &ApiSourceField) -> Result<SourceField, CatalogError> {
    let field_id =
        FieldId::new(api_field.field_id.clone()).map_err(|reason| CatalogError::InvalidFieldId {
            field_id: api_field.field_id.clone(),
            reason,
        })?;

    let parse_unit = |unit_id: &str| -> Result<Unit, CatalogError> {
        unit_id.parse().map_err(|_| CatalogError::UnknownFieldUnit {
            field_id: field_id.clone(),
            unit_id: unit_id.to_owned(),
        })
    };

    let default_unit = parse_unit(&api_field.default_unit_id)?;
    let mut available_units = Vec::with_capacity(api_field.available_unit_ids.len());
    for unit_id in &api_field.available_unit_ids {
        available_units.push(parse_unit(unit_id)?);
    }

    Ok(SourceField::new(
        api_field.display_name.clone(),
        field_id,
        default_unit,
        available_units,
    ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidFieldId { field_id: String, reason: IdError },
    DuplicateField { field_id: FieldId },
    UnknownUnit { unit_id: String },
    UnknownFieldUnit { field_id: FieldId, unit_id: String },
    DefaultUnitNotAvailable { field_id: FieldId, unit: Unit },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldId { field_id, reason } => {
                write!(f, "invalid field id '{field_id}': {reason}")
            }
            Self::DuplicateField { field_id } => {
                write!(f, "duplicate field id (field_id={field_id})")
            }
            Self::UnknownUnit { unit_id } => {
                write!(f, "unknown unit in unit table (unit_id={unit_id})")
            }
            Self::UnknownFieldUnit { field_id, unit_id } => {
                write!(
                    f,
                    "unknown unit on field (field_id={field_id}, unit_id={unit_id})"
                )
            }
            Self::DefaultUnitNotAvailable { field_id, unit } => {
                write!(
                    f,
                    "default unit not in available list (field_id={field_id}, unit={unit})"
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}
