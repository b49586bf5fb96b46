// advanced-circuits-config/src/loader.rs
// ============================================================================
// Module: Config Loader
// Description: Version gate, schema validation, and document materialization.
// Purpose: Sole entry point turning a document into a Configuration.
// Dependencies: jsonschema, serde_json
// ============================================================================

//! ## Overview
//! The loader performs one complete load as an atomic unit of work: locate
//! the co-located schema, parse the document, gate on the declared version,
//! validate against the schema, then extract scalars and walk the keyed
//! sections. Any failure at any step discards the in-progress object and
//! propagates a single [`ConfigError`]; no partial results are ever returned
//! and nothing falls back to defaults. Schema warnings go to the injected
//! [`DiagnosticsSink`] and do not abort loading.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use jsonschema::Draft;
use serde_json::Map;
use serde_json::Value;

use crate::component::BlockActivatorConfig;
use crate::component::DartTrapConfig;
use crate::component::ProfileKey;
use crate::component::PumpConfig;
use crate::component::StatueConfig;
use crate::component::StatueKind;
use crate::config::CURRENT_VERSION;
use crate::config::ConfigError;
use crate::config::Configuration;
use crate::config::DART_TRAP_CONFIGS_TAG;
use crate::config::LEGACY_VERSION;
use crate::config::PUMP_CONFIGS_TAG;
use crate::config::STATUE_CONFIGS_TAG;
use crate::config::SchemaViolation;
use crate::config::schema_path_for;
use crate::diagnostics::DiagnosticsSink;
use crate::diagnostics::ValidationWarning;
use crate::parse::parse_bool;
use crate::parse::parse_string;
use crate::parse::parse_u32;
use crate::parse::require_member;
use crate::section::ProfileSection;
use crate::section::SectionKey;

// ============================================================================
// SECTION: Loader
// ============================================================================

/// Loads and validates advanced circuits configuration documents.
///
/// # Invariants
/// - Each call to [`ConfigLoader::load`] produces an independent
///   [`Configuration`]; no state is shared across loads.
pub struct ConfigLoader<'a> {
    /// Sink receiving warning-severity validation diagnostics.
    diagnostics: &'a dyn DiagnosticsSink,
}

impl<'a> ConfigLoader<'a> {
    /// Creates a loader routing warnings to the given sink.
    #[must_use]
    pub const fn new(diagnostics: &'a dyn DiagnosticsSink) -> Self {
        Self {
            diagnostics,
        }
    }

    /// Loads a configuration document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the schema file is missing, the document
    /// is malformed, the declared version is unsupported, schema validation
    /// fails, or any field or section entry cannot be materialized.
    pub fn load(&self, path: &Path) -> Result<Configuration, ConfigError> {
        let schema_path = schema_path_for(path);
        if !schema_path.is_file() {
            return Err(ConfigError::SchemaNotFound(schema_path.display().to_string()));
        }

        let document = read_json(path)?;
        let root = document
            .as_object()
            .ok_or_else(|| ConfigError::Parse("document root must be an object".to_string()))?;

        let declared = declared_version(root)?;
        if declared != CURRENT_VERSION {
            return Err(ConfigError::VersionMismatch {
                expected: CURRENT_VERSION.to_string(),
                found: declared,
            });
        }

        let schema = read_json(&schema_path)?;
        self.validate_document(&schema, &document)?;

        Ok(Configuration {
            override_vanilla_circuits: parse_bool(
                "OverrideVanillaCircuits",
                required_member(root, "OverrideVanillaCircuits")?,
            )?,
            advanced_circuits_enabled: parse_bool(
                "AdvancedCircuitsEnabled",
                required_member(root, "AdvancedCircuitsEnabled")?,
            )?,
            max_dart_traps_per_circuit: parse_u32(
                "MaxDartTrapsPerCircuit",
                required_member(root, "MaxDartTrapsPerCircuit")?,
            )?,
            max_statues_per_circuit: parse_u32(
                "MaxStatuesPerCircuit",
                required_member(root, "MaxStatuesPerCircuit")?,
            )?,
            max_pumps_per_circuit: parse_u32(
                "MaxPumpsPerCircuit",
                required_member(root, "MaxPumpsPerCircuit")?,
            )?,
            max_circuit_length: parse_u32(
                "MaxCircuitLength",
                required_member(root, "MaxCircuitLength")?,
            )?,
            boulder_wire_permission: parse_string(
                "BoulderWirePermission",
                required_member(root, "BoulderWirePermission")?,
            )?,
            block_activator_config: BlockActivatorConfig::from_node(required_node(
                root,
                "BlockActivatorConfig",
            )?)?,
            pump_configs: read_section(
                root,
                PUMP_CONFIGS_TAG,
                "Profile",
                ProfileKey::from_token,
                PumpConfig::from_node,
            )?,
            dart_trap_configs: read_section(
                root,
                DART_TRAP_CONFIGS_TAG,
                "Profile",
                ProfileKey::from_token,
                DartTrapConfig::from_node,
            )?,
            statue_configs: read_section(
                root,
                STATUE_CONFIGS_TAG,
                "StatueType",
                StatueKind::from_token,
                StatueConfig::from_node,
            )?,
        })
    }

    /// Validates the document against the compiled schema.
    ///
    /// Violations abort the load; deprecation annotations only produce sink
    /// warnings.
    fn validate_document(&self, schema: &Value, document: &Value) -> Result<(), ConfigError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(schema)
            .map_err(|err| ConfigError::Parse(format!("invalid schema: {err}")))?;
        let violations: Vec<SchemaViolation> = validator
            .iter_errors(document)
            .map(|err| SchemaViolation {
                location: err.instance_path().to_string(),
                message: err.to_string(),
            })
            .collect();
        if !violations.is_empty() {
            return Err(ConfigError::SchemaValidation(violations));
        }
        self.report_deprecations(schema, document);
        Ok(())
    }

    /// Warns about document members the schema marks as deprecated.
    fn report_deprecations(&self, schema: &Value, document: &Value) {
        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            return;
        };
        let Some(root) = document.as_object() else {
            return;
        };
        for (name, property) in properties {
            let deprecated =
                property.get("deprecated").and_then(Value::as_bool).unwrap_or(false);
            if deprecated && root.contains_key(name) {
                let warning = ValidationWarning::new(
                    format!("/{name}"),
                    format!("{name} is deprecated and tolerated for this version only"),
                );
                self.diagnostics.warn(&warning);
            }
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads and parses a JSON file.
fn read_json(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|err| ConfigError::Io(format!("{}: {err}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))
}

/// Reads the declared document version, defaulting absent to the legacy token.
fn declared_version(root: &Map<String, Value>) -> Result<String, ConfigError> {
    match root.get("Version") {
        None => Ok(LEGACY_VERSION.to_string()),
        Some(Value::String(version)) => Ok(version.clone()),
        Some(other) => {
            Err(ConfigError::Format(format!("Version must be a string, found {other}")))
        }
    }
}

/// Returns a required top-level member after successful schema validation.
fn required_member<'v>(root: &'v Map<String, Value>, field: &str) -> Result<&'v Value, ConfigError> {
    root.get(field).ok_or_else(|| {
        ConfigError::InternalInconsistency(format!("{field} is missing after schema validation"))
    })
}

/// Returns a required top-level member as an object node.
fn required_node<'v>(
    root: &'v Map<String, Value>,
    field: &str,
) -> Result<&'v Map<String, Value>, ConfigError> {
    required_member(root, field)?.as_object().ok_or_else(|| {
        ConfigError::InternalInconsistency(format!("{field} must be an object node"))
    })
}

/// Walks one keyed section, parsing each entry and rejecting duplicates.
fn read_section<K: SectionKey, C>(
    root: &Map<String, Value>,
    tag: &'static str,
    key_attribute: &str,
    parse_key: fn(&str) -> Option<K>,
    parse_entry: fn(&Map<String, Value>) -> Result<C, ConfigError>,
) -> Result<ProfileSection<K, C>, ConfigError> {
    let entries = required_member(root, tag)?.as_array().ok_or_else(|| {
        ConfigError::InternalInconsistency(format!("{tag} must be an array node"))
    })?;
    let mut section = ProfileSection::new(tag);
    for entry in entries {
        let node = entry.as_object().ok_or_else(|| {
            ConfigError::Format(format!("{tag} entries must be objects, found {entry}"))
        })?;
        let token = parse_string(key_attribute, require_member(node, key_attribute)?)?;
        let key = parse_key(&token).ok_or_else(|| {
            ConfigError::Format(format!("unknown {tag} {key_attribute} token {token}"))
        })?;
        section.insert(key, parse_entry(node)?)?;
    }
    Ok(section)
}
