// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

//! Wire payloads shared with hosts: the source-model contract served to the
//! editor and the export contract consumed by the telemetry runtime.
//!
//! Conversions are deliberately asymmetric. Export writes every row as-is;
//! import is defensive because the catalog may have changed since the file
//! was written.

use std::fmt;

use schemars::Schema;

use crate::catalog::Catalog;
use crate::model::{DashboardModel, DataPoint, DataPointRow, FieldId, Unit};

pub mod types;

pub use types::{
    ApiAdvancedSettings, ApiExportField, ApiExportModel, ApiExportRow, ApiSourceField,
    ApiSourceModel, ApiUnit,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    UnknownUnit { unit_id: String },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUnit { unit_id } => write!(f, "unknown unit id (unit_id={unit_id})"),
        }
    }
}

impl std::error::Error for ImportError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvancedSettingsError {
    ZeroBindPort,
    PollIntervalOutOfRange { value: u32, min: u32, max: u32 },
}

impl fmt::Display for AdvancedSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBindPort => f.write_str("lua bind port must not be zero"),
            Self::PollIntervalOutOfRange { value, min, max } => {
                write!(f, "poll interval out of range (value={value}, min={min}, max={max})")
            }
        }
    }
}

impl std::error::Error for AdvancedSettingsError {}

impl ApiAdvancedSettings {
    pub const DEFAULT_LUA_BIND_ADDRESS: &'static str = "127.0.0.1";
    pub const DEFAULT_LUA_BIND_PORT: u16 = 52025;
    pub const DEFAULT_POLL_INTERVAL_MS: u32 = 200;

    pub const MIN_POLL_INTERVAL_MS: u32 = 50;
    pub const MAX_POLL_INTERVAL_MS: u32 = 60_000;

    pub fn effective_bind_address(&self) -> &str {
        self.lua_bind_address.as_deref().unwrap_or(Self::DEFAULT_LUA_BIND_ADDRESS)
    }

    pub fn effective_bind_port(&self) -> u16 {
        self.lua_bind_port.unwrap_or(Self::DEFAULT_LUA_BIND_PORT)
    }

    pub fn effective_poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms.unwrap_or(Self::DEFAULT_POLL_INTERVAL_MS)
    }

    /// Checks the settings after defaults are applied. Absent values are
    /// always fine; explicit values must be usable by the runtime.
    pub fn validate(&self) -> Result<(), AdvancedSettingsError> {
        if self.effective_bind_port() == 0 {
            return Err(AdvancedSettingsError::ZeroBindPort);
        }
        let value = self.effective_poll_interval_ms();
        if !(Self::MIN_POLL_INTERVAL_MS..=Self::MAX_POLL_INTERVAL_MS).contains(&value) {
            return Err(AdvancedSettingsError::PollIntervalOutOfRange {
                value,
                min: Self::MIN_POLL_INTERVAL_MS,
                max: Self::MAX_POLL_INTERVAL_MS,
            });
        }
        Ok(())
    }
}

impl ApiSourceModel {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ApiExportModel {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Serializes `model` into the export contract. Every row is written,
/// including empty ones; color scales stay editor-local and are not part of
/// the payload.
pub fn build_export_model(
    model: &DashboardModel,
    advanced_settings: Option<ApiAdvancedSettings>,
) -> ApiExportModel {
    let rows = model
        .rows()
        .iter()
        .map(|row| ApiExportRow {
            fields: row.data_points().iter().map(export_field).collect(),
        })
        .collect();
    ApiExportModel { rows, advanced_settings }
}

fn export_field(point: &DataPoint) -> ApiExportField {
    ApiExportField {
        display_name: point.display_name().to_owned(),
        field_id: point.field_id().as_str().to_owned(),
        unit_id: point.output_unit().as_str().to_owned(),
    }
}

/// Rebuilds a dashboard from an export payload against `catalog`.
///
/// Fields bound to ids the catalog no longer knows are skipped, and rows
/// that end up empty (on the wire or through skipping) are dropped. A unit
/// the resolved field no longer offers falls back to the field's default.
/// An unknown unit id is a malformed payload and fails the import. The
/// returned model starts at rev 0.
pub fn build_dashboard_model(
    payload: &ApiExportModel,
    catalog: &Catalog,
) -> Result<DashboardModel, ImportError> {
    let mut rows = Vec::new();
    for row in &payload.rows {
        let mut points = Vec::new();
        for field in &row.fields {
            let unit: Unit = field.unit_id.parse().map_err(|_| ImportError::UnknownUnit {
                unit_id: field.unit_id.clone(),
            })?;
            let Ok(field_id) = FieldId::new(&field.field_id) else {
                continue;
            };
            let Some(source) = catalog.field(&field_id) else {
                continue;
            };
            let unit = if source.has_unit(unit) { unit } else { source.default_unit() };
            points.push(DataPoint::new(field.display_name.clone(), field_id, unit));
        }
        if !points.is_empty() {
            rows.push(DataPointRow::from_points(points));
        }
    }
    Ok(DashboardModel::from_rows(rows))
}

/// JSON schema of the source-model contract, for hosts that validate or
/// document the wire format.
pub fn source_model_schema() -> Schema {
    schemars::schema_for!(ApiSourceModel)
}

/// JSON schema of the export contract.
pub fn export_model_schema() -> Schema {
    schemars::schema_for!(ApiExportModel)
}
