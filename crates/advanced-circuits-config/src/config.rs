// advanced-circuits-config/src/config.rs
// ============================================================================
// Module: Configuration Aggregate
// Description: Root settings object and error taxonomy for config loading.
// Purpose: Immutable, construction-time-populated simulation settings.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`Configuration`] is the root aggregate consumed by the circuit
//! simulation: scalar caps and switches, one block activator sub-config, and
//! three profile-keyed sections. It is populated at construction time and
//! immutable afterwards; a reload produces a whole new instance that the
//! caller swaps in atomically. [`ConfigError`] is the single error taxonomy
//! for every load failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::component::BlockActivatorConfig;
use crate::component::DartTrapConfig;
use crate::component::ProfileKey;
use crate::component::PumpConfig;
use crate::component::StatueConfig;
use crate::component::StatueKind;
use crate::section::ProfileSection;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Configuration document version supported by this build.
pub const CURRENT_VERSION: &str = "1.2";
/// Version assumed for documents without a `Version` member.
pub(crate) const LEGACY_VERSION: &str = "1.0";
/// Extension of the co-located schema file.
pub(crate) const SCHEMA_EXTENSION: &str = "schema.json";

/// Derives the co-located schema path for a document path.
pub(crate) fn schema_path_for(path: &Path) -> PathBuf {
    path.with_extension(SCHEMA_EXTENSION)
}

/// Document tag of the pump section.
pub(crate) const PUMP_CONFIGS_TAG: &str = "PumpConfigs";
/// Document tag of the dart trap section.
pub(crate) const DART_TRAP_CONFIGS_TAG: &str = "DartTrapConfigs";
/// Document tag of the statue section.
pub(crate) const STATUE_CONFIGS_TAG: &str = "StatueConfigs";

/// Default for overriding vanilla circuit handling.
pub(crate) const DEFAULT_OVERRIDE_VANILLA_CIRCUITS: bool = false;
/// Default for enabling advanced circuits.
pub(crate) const DEFAULT_ADVANCED_CIRCUITS_ENABLED: bool = true;
/// Default cap on dart traps per circuit.
pub(crate) const DEFAULT_MAX_DART_TRAPS_PER_CIRCUIT: u32 = 10;
/// Default cap on statues per circuit.
pub(crate) const DEFAULT_MAX_STATUES_PER_CIRCUIT: u32 = 10;
/// Default cap on pumps per circuit.
pub(crate) const DEFAULT_MAX_PUMPS_PER_CIRCUIT: u32 = 4;
/// Default cap on total circuit length in wires.
pub(crate) const DEFAULT_MAX_CIRCUIT_LENGTH: u32 = 400;
/// Default permission node guarding boulder wiring.
pub(crate) const DEFAULT_BOULDER_WIRE_PERMISSION: &str = "advancedcircuits.wireboulder";

// ============================================================================
// SECTION: Configuration Aggregate
// ============================================================================

/// Root settings object for the advanced circuits simulation.
///
/// # Invariants
/// - Integer caps are non-negative by type.
/// - Default-constructed instances carry exactly one `Default`-keyed entry in
///   the pump and dart trap sections and an empty statue section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Whether vanilla circuit handling is overridden.
    pub(crate) override_vanilla_circuits: bool,
    /// Whether advanced circuits are enabled at all.
    pub(crate) advanced_circuits_enabled: bool,
    /// Cap on dart traps per circuit.
    pub(crate) max_dart_traps_per_circuit: u32,
    /// Cap on statues per circuit.
    pub(crate) max_statues_per_circuit: u32,
    /// Cap on pumps per circuit.
    pub(crate) max_pumps_per_circuit: u32,
    /// Cap on total circuit length in wires.
    pub(crate) max_circuit_length: u32,
    /// Permission node guarding boulder wiring (opaque identifier).
    pub(crate) boulder_wire_permission: String,
    /// Block activator settings.
    pub(crate) block_activator_config: BlockActivatorConfig,
    /// Pump settings per profile.
    pub(crate) pump_configs: ProfileSection<ProfileKey, PumpConfig>,
    /// Dart trap settings per profile.
    pub(crate) dart_trap_configs: ProfileSection<ProfileKey, DartTrapConfig>,
    /// Statue settings per statue kind.
    pub(crate) statue_configs: ProfileSection<StatueKind, StatueConfig>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            override_vanilla_circuits: DEFAULT_OVERRIDE_VANILLA_CIRCUITS,
            advanced_circuits_enabled: DEFAULT_ADVANCED_CIRCUITS_ENABLED,
            max_dart_traps_per_circuit: DEFAULT_MAX_DART_TRAPS_PER_CIRCUIT,
            max_statues_per_circuit: DEFAULT_MAX_STATUES_PER_CIRCUIT,
            max_pumps_per_circuit: DEFAULT_MAX_PUMPS_PER_CIRCUIT,
            max_circuit_length: DEFAULT_MAX_CIRCUIT_LENGTH,
            boulder_wire_permission: DEFAULT_BOULDER_WIRE_PERMISSION.to_string(),
            block_activator_config: BlockActivatorConfig::default(),
            pump_configs: ProfileSection::with_entry(
                PUMP_CONFIGS_TAG,
                ProfileKey::Default,
                PumpConfig::default(),
            ),
            dart_trap_configs: ProfileSection::with_entry(
                DART_TRAP_CONFIGS_TAG,
                ProfileKey::Default,
                DartTrapConfig::default(),
            ),
            statue_configs: ProfileSection::new(STATUE_CONFIGS_TAG),
        }
    }
}

impl Configuration {
    /// Returns whether vanilla circuit handling is overridden.
    #[must_use]
    pub const fn override_vanilla_circuits(&self) -> bool {
        self.override_vanilla_circuits
    }

    /// Returns whether advanced circuits are enabled.
    #[must_use]
    pub const fn advanced_circuits_enabled(&self) -> bool {
        self.advanced_circuits_enabled
    }

    /// Returns the cap on dart traps per circuit.
    #[must_use]
    pub const fn max_dart_traps_per_circuit(&self) -> u32 {
        self.max_dart_traps_per_circuit
    }

    /// Returns the cap on statues per circuit.
    #[must_use]
    pub const fn max_statues_per_circuit(&self) -> u32 {
        self.max_statues_per_circuit
    }

    /// Returns the cap on pumps per circuit.
    #[must_use]
    pub const fn max_pumps_per_circuit(&self) -> u32 {
        self.max_pumps_per_circuit
    }

    /// Returns the cap on total circuit length in wires.
    #[must_use]
    pub const fn max_circuit_length(&self) -> u32 {
        self.max_circuit_length
    }

    /// Returns the permission node guarding boulder wiring.
    #[must_use]
    pub fn boulder_wire_permission(&self) -> &str {
        &self.boulder_wire_permission
    }

    /// Returns the block activator settings.
    #[must_use]
    pub const fn block_activator_config(&self) -> &BlockActivatorConfig {
        &self.block_activator_config
    }

    /// Returns the pump settings per profile.
    #[must_use]
    pub const fn pump_configs(&self) -> &ProfileSection<ProfileKey, PumpConfig> {
        &self.pump_configs
    }

    /// Returns the dart trap settings per profile.
    #[must_use]
    pub const fn dart_trap_configs(&self) -> &ProfileSection<ProfileKey, DartTrapConfig> {
        &self.dart_trap_configs
    }

    /// Returns the statue settings per statue kind.
    #[must_use]
    pub const fn statue_configs(&self) -> &ProfileSection<StatueKind, StatueConfig> {
        &self.statue_configs
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A single structural violation reported by schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending document location.
    pub location: String,
    /// Human-readable violation message.
    pub message: String,
}

/// Configuration loading or validation errors.
///
/// # Invariants
/// - Every variant is fatal to the load; no partial results escape.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading the document or schema.
    #[error("config io error: {0}")]
    Io(String),
    /// Document or schema is not well-formed, or the schema fails to compile.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Co-located schema file is missing.
    #[error("config schema not found at {0}")]
    SchemaNotFound(String),
    /// Declared document version does not match the supported version.
    #[error("unsupported config version: expected {expected}, found {found}")]
    VersionMismatch {
        /// Version supported by this build.
        expected: String,
        /// Version declared by the document.
        found: String,
    },
    /// Document failed schema validation.
    #[error("config schema validation failed: {}", violations_summary(.0))]
    SchemaValidation(Vec<SchemaViolation>),
    /// A field failed type coercion or enum parsing, or a key was duplicated.
    #[error("config format error: {0}")]
    Format(String),
    /// Schema accepted the document but a required member is missing.
    #[error("config internal inconsistency: {0}")]
    InternalInconsistency(String),
}

/// Joins schema violations into a single display line.
fn violations_summary(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("{}: {}", violation.location, violation.message))
        .collect::<Vec<_>>()
        .join("; ")
}
