// advanced-circuits-config/src/schema.rs
// ============================================================================
// Module: Config Schema
// Description: JSON schema builder for advanced-circuits.json.
// Purpose: Provide the canonical validation schema for config documents.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the canonical JSON Schema (draft 2020-12) for the
//! advanced circuits configuration document. The schema is generated from
//! the config model so on-disk schema files stay derivable from one source
//! of truth; [`write_config_schema`] materializes it next to a document.
//! Enum token lists and defaults are taken from the model to prevent drift.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde_json::Value;
use serde_json::json;

use crate::component::BlockActivatorConfig;
use crate::component::DartTrapConfig;
use crate::component::ProfileKey;
use crate::component::PumpConfig;
use crate::component::StatueConfig;
use crate::component::StatueKind;
use crate::config::ConfigError;
use crate::config::DEFAULT_ADVANCED_CIRCUITS_ENABLED;
use crate::config::DEFAULT_BOULDER_WIRE_PERMISSION;
use crate::config::DEFAULT_MAX_CIRCUIT_LENGTH;
use crate::config::DEFAULT_MAX_DART_TRAPS_PER_CIRCUIT;
use crate::config::DEFAULT_MAX_PUMPS_PER_CIRCUIT;
use crate::config::DEFAULT_MAX_STATUES_PER_CIRCUIT;
use crate::config::DEFAULT_OVERRIDE_VANILLA_CIRCUITS;
use crate::config::LEGACY_VERSION;
use crate::config::schema_path_for;
use crate::section::SectionKey;

// ============================================================================
// SECTION: Root Schema
// ============================================================================

/// Returns the canonical JSON schema for `advanced-circuits.json`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "advanced-circuits://schemas/config.schema.json",
        "title": "Advanced Circuits Configuration",
        "description": "Settings for the advanced circuits simulation.",
        "type": "object",
        "properties": {
            "Version": {
                "type": "string",
                "default": LEGACY_VERSION,
                "description": "Document format version."
            },
            "OverrideVanillaCircuits": {
                "type": "boolean",
                "default": DEFAULT_OVERRIDE_VANILLA_CIRCUITS,
                "description": "Whether vanilla circuit handling is overridden."
            },
            "AdvancedCircuitsEnabled": {
                "type": "boolean",
                "default": DEFAULT_ADVANCED_CIRCUITS_ENABLED,
                "description": "Whether advanced circuits are enabled."
            },
            "MaxDartTrapsPerCircuit": schema_for_cap(
                "Maximum dart traps per circuit.",
                DEFAULT_MAX_DART_TRAPS_PER_CIRCUIT
            ),
            "MaxStatuesPerCircuit": schema_for_cap(
                "Maximum statues per circuit.",
                DEFAULT_MAX_STATUES_PER_CIRCUIT
            ),
            "MaxPumpsPerCircuit": schema_for_cap(
                "Maximum pumps per circuit.",
                DEFAULT_MAX_PUMPS_PER_CIRCUIT
            ),
            "MaxCircuitLength": schema_for_cap(
                "Maximum circuit length in wires.",
                DEFAULT_MAX_CIRCUIT_LENGTH
            ),
            "BoulderWirePermission": {
                "type": "string",
                "default": DEFAULT_BOULDER_WIRE_PERMISSION,
                "description": "Permission node required to wire boulders."
            },
            "BlockActivatorConfig": block_activator_schema(),
            "PumpConfigs": {
                "type": "array",
                "items": pump_entry_schema(),
                "default": [],
                "description": "Pump overrides per profile."
            },
            "DartTrapConfigs": {
                "type": "array",
                "items": dart_trap_entry_schema(),
                "default": [],
                "description": "Dart trap overrides per profile."
            },
            "StatueConfigs": {
                "type": "array",
                "items": statue_entry_schema(),
                "default": [],
                "description": "Statue behavior per statue kind."
            }
        },
        "required": [
            "OverrideVanillaCircuits",
            "AdvancedCircuitsEnabled",
            "MaxDartTrapsPerCircuit",
            "MaxStatuesPerCircuit",
            "MaxPumpsPerCircuit",
            "MaxCircuitLength",
            "BoulderWirePermission",
            "BlockActivatorConfig",
            "PumpConfigs",
            "DartTrapConfigs",
            "StatueConfigs"
        ],
        "additionalProperties": false
    })
}

/// Writes the canonical schema next to a config document.
///
/// The schema lands at the document's base name with the schema extension,
/// exactly where the loader looks for it.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the schema file cannot be written.
pub fn write_config_schema(document_path: &Path) -> Result<(), ConfigError> {
    let rendered = format!("{:#}", config_schema());
    fs::write(schema_path_for(document_path), rendered)
        .map_err(|err| ConfigError::Io(err.to_string()))
}

// ============================================================================
// SECTION: Section Schemas
// ============================================================================

/// Schema for the block activator sub-config node.
fn block_activator_schema() -> Value {
    let defaults = BlockActivatorConfig::default();
    json!({
        "type": "object",
        "properties": {
            "MaxChangeableBlocks": schema_for_cap(
                "Maximum blocks changed by one trigger.",
                defaults.max_changeable_blocks
            ),
            "Cooldown": schema_for_cap(
                "Ticks the activator stays inert after triggering.",
                defaults.cooldown
            )
        },
        "required": ["MaxChangeableBlocks", "Cooldown"],
        "additionalProperties": false,
        "description": "Block activator settings."
    })
}

/// Schema for one pump section entry.
fn pump_entry_schema() -> Value {
    let defaults = PumpConfig::default();
    json!({
        "type": "object",
        "properties": {
            "Profile": profile_token_schema(),
            "TransferableWater": schema_for_cap(
                "Water volume transferred per trigger.",
                defaults.transferable_water
            ),
            "TransferableLava": schema_for_cap(
                "Lava volume transferred per trigger.",
                defaults.transferable_lava
            ),
            "Cooldown": schema_for_cap(
                "Ticks the pump stays inert after triggering.",
                defaults.cooldown
            ),
            "TriggerPermission": nullable_permission_schema()
        },
        "required": ["Profile", "TransferableWater", "TransferableLava", "Cooldown"],
        "additionalProperties": false,
        "description": "Pump settings for one profile."
    })
}

/// Schema for one dart trap section entry.
fn dart_trap_entry_schema() -> Value {
    let defaults = DartTrapConfig::default();
    json!({
        "type": "object",
        "properties": {
            "Profile": profile_token_schema(),
            "ProjectileType": schema_for_cap(
                "Projectile type identifier fired by the trap.",
                defaults.projectile_type
            ),
            "ProjectileDamage": schema_for_cap(
                "Damage dealt by a fired projectile.",
                defaults.projectile_damage
            ),
            "ProjectileSpeed": schema_for_cap(
                "Speed of a fired projectile.",
                defaults.projectile_speed
            ),
            "Cooldown": schema_for_cap(
                "Ticks the trap stays inert after triggering.",
                defaults.cooldown
            ),
            "TriggerPermission": nullable_permission_schema()
        },
        "required": [
            "Profile",
            "ProjectileType",
            "ProjectileDamage",
            "ProjectileSpeed",
            "Cooldown"
        ],
        "additionalProperties": false,
        "description": "Dart trap settings for one profile."
    })
}

/// Schema for one statue section entry.
fn statue_entry_schema() -> Value {
    let defaults = StatueConfig::default();
    json!({
        "type": "object",
        "properties": {
            "StatueType": statue_token_schema(),
            "PlayerCheckRange": schema_for_cap(
                "Tile range checked for nearby players (0 disables).",
                defaults.player_check_range
            ),
            "Cooldown": schema_for_cap(
                "Ticks the statue stays inert after triggering.",
                defaults.cooldown
            ),
            "TriggerPermission": nullable_permission_schema()
        },
        "required": ["StatueType", "PlayerCheckRange", "Cooldown"],
        "additionalProperties": false,
        "description": "Statue settings for one statue kind."
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema for a non-negative integer cap with a documented default.
fn schema_for_cap(description: &str, default: u32) -> Value {
    json!({
        "type": "integer",
        "minimum": 0,
        "maximum": u32::MAX,
        "default": default,
        "description": description
    })
}

/// Schema for the closed set of profile tokens.
fn profile_token_schema() -> Value {
    let tokens: Vec<&'static str> = ProfileKey::ALL.iter().map(|key| key.token()).collect();
    json!({
        "type": "string",
        "enum": tokens,
        "description": "Profile the entry applies to."
    })
}

/// Schema for the closed set of statue kind tokens.
fn statue_token_schema() -> Value {
    let tokens: Vec<&'static str> = StatueKind::ALL.iter().map(|kind| kind.token()).collect();
    json!({
        "type": "string",
        "enum": tokens,
        "description": "Statue kind the entry applies to."
    })
}

/// Schema for an optional permission node.
fn nullable_permission_schema() -> Value {
    json!({
        "oneOf": [
            { "type": "null" },
            { "type": "string", "minLength": 1 }
        ],
        "default": null,
        "description": "Permission node required to trigger, if any."
    })
}
