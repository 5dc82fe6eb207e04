// SPDX-FileCopyrightText: 2026 Kevin Rzepka
// SPDX-License-Identifier: MIT

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiUnit {
    pub display_name: String,
    pub unit_id: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiSourceField {
    pub display_name: String,
    pub field_id: String,
    pub default_unit_id: String,
    pub available_unit_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiSourceModel {
    pub units: Vec<ApiUnit>,
    pub fields: Vec<ApiSourceField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiExportField {
    pub display_name: String,
    pub field_id: String,
    pub unit_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiExportRow {
    pub fields: Vec<ApiExportField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiAdvancedSettings {
    pub lua_bind_address: Option<String>,
    pub lua_bind_port: Option<u16>,
    pub poll_interval_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiExportModel {
    pub rows: Vec<ApiExportRow>,
    pub advanced_settings: Option<ApiAdvancedSettings>,
}
