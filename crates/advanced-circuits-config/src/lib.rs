// advanced-circuits-config/src/lib.rs
// ============================================================================
// Module: Advanced Circuits Config Library
// Description: Canonical config model, schema validation, and loading.
// Purpose: Single source of truth for advanced-circuits.json semantics.
// Dependencies: jsonschema, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `advanced-circuits-config` defines the canonical configuration model for
//! the advanced circuits simulation. It loads a versioned JSON document,
//! validates it against a co-located JSON Schema, and materializes an
//! immutable [`Configuration`] aggregate with per-profile and per-statue
//! sub-configuration sections.
//!
//! Loading is strict and fail-closed: version mismatches, schema violations,
//! malformed fields, unknown profile tokens, and duplicate section keys all
//! abort the load. Schema warnings (deprecated constructs) are the only
//! non-fatal channel and are routed to an injected [`DiagnosticsSink`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod component;
pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod parse;
pub mod schema;
pub mod section;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use component::*;
pub use config::*;
pub use diagnostics::*;
pub use loader::ConfigLoader;
pub use schema::config_schema;
pub use schema::write_config_schema;
pub use section::ProfileSection;
pub use section::SectionKey;
