// advanced-circuits-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared fixtures for config loading tests.
// Purpose: Reduce duplication across integration tests for the config crate.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use advanced_circuits_config::ConfigError;
use advanced_circuits_config::ConfigLoader;
use advanced_circuits_config::Configuration;
use advanced_circuits_config::DiagnosticsSink;
use advanced_circuits_config::NoopDiagnosticsSink;
use advanced_circuits_config::ValidationWarning;
use advanced_circuits_config::write_config_schema;
use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

/// Diagnostics sink that records warnings for assertions.
#[derive(Default)]
pub struct RecordingSink {
    /// Captured warnings in emission order.
    warnings: Mutex<Vec<ValidationWarning>>,
}

impl RecordingSink {
    /// Returns the captured warnings, draining the sink.
    pub fn take(&self) -> Result<Vec<ValidationWarning>, String> {
        let mut warnings =
            self.warnings.lock().map_err(|_| "warning sink poisoned".to_string())?;
        Ok(std::mem::take(&mut *warnings))
    }
}

impl DiagnosticsSink for RecordingSink {
    fn warn(&self, warning: &ValidationWarning) {
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(warning.clone());
        }
    }
}

/// Returns a fully valid document at the supported version.
pub fn valid_document() -> Value {
    json!({
        "Version": "1.2",
        "OverrideVanillaCircuits": false,
        "AdvancedCircuitsEnabled": true,
        "MaxDartTrapsPerCircuit": 10,
        "MaxStatuesPerCircuit": 10,
        "MaxPumpsPerCircuit": 4,
        "MaxCircuitLength": 400,
        "BoulderWirePermission": "advancedcircuits.wireboulder",
        "BlockActivatorConfig": {
            "MaxChangeableBlocks": 100,
            "Cooldown": 30
        },
        "PumpConfigs": [pump_entry("Default")],
        "DartTrapConfigs": [dart_trap_entry("Default")],
        "StatueConfigs": []
    })
}

/// Returns a pump section entry for the given profile token.
pub fn pump_entry(profile: &str) -> Value {
    json!({
        "Profile": profile,
        "TransferableWater": 10,
        "TransferableLava": 10,
        "Cooldown": 0
    })
}

/// Returns a dart trap section entry for the given profile token.
pub fn dart_trap_entry(profile: &str) -> Value {
    json!({
        "Profile": profile,
        "ProjectileType": 98,
        "ProjectileDamage": 20,
        "ProjectileSpeed": 12,
        "Cooldown": 180
    })
}

/// Returns a statue section entry for the given statue token.
pub fn statue_entry(statue: &str) -> Value {
    json!({
        "StatueType": statue,
        "PlayerCheckRange": 20,
        "Cooldown": 60
    })
}

/// Writes a document with the canonical schema and loads it through a sink.
pub fn load_with_sink(
    document: &Value,
    sink: &dyn DiagnosticsSink,
) -> Result<Result<Configuration, ConfigError>, String> {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let document_path = write_document(&dir, document)?;
    write_config_schema(&document_path).map_err(|err| err.to_string())?;
    Ok(ConfigLoader::new(sink).load(&document_path))
}

/// Writes a document with a caller-supplied schema and loads it through a sink.
pub fn load_with_schema(
    document: &Value,
    schema: &Value,
    sink: &dyn DiagnosticsSink,
) -> Result<Result<Configuration, ConfigError>, String> {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let document_path = write_document(&dir, document)?;
    fs::write(dir.path().join("advanced-circuits.schema.json"), format!("{schema:#}"))
        .map_err(|err| err.to_string())?;
    Ok(ConfigLoader::new(sink).load(&document_path))
}

/// Writes a document with the canonical schema and loads it, discarding warnings.
pub fn load(document: &Value) -> Result<Result<Configuration, ConfigError>, String> {
    load_with_sink(document, &NoopDiagnosticsSink)
}

/// Writes the document file into a fixture directory.
fn write_document(dir: &TempDir, document: &Value) -> Result<PathBuf, String> {
    let document_path = dir.path().join("advanced-circuits.json");
    fs::write(&document_path, format!("{document:#}")).map_err(|err| err.to_string())?;
    Ok(document_path)
}
