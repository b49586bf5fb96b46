// advanced-circuits-config/src/diagnostics.rs
// ============================================================================
// Module: Validation Diagnostics
// Description: Warning-severity diagnostics emitted during config loading.
// Purpose: Route non-fatal schema concerns without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Schema validation warnings are the only non-fatal diagnostic channel of
//! the loader. They are routed to an injected [`DiagnosticsSink`] so
//! deployments can forward them to their preferred logging pipeline and
//! tests can capture them in isolation. The sink is not required for
//! correctness, only for observability.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Schema validation warning payload.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationWarning {
    /// Event identifier.
    pub event: &'static str,
    /// JSON pointer to the document location that triggered the warning.
    pub location: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning with a stable event label.
    #[must_use]
    pub const fn new(location: String, message: String) -> Self {
        Self {
            event: "config_validation_warning",
            location,
            message,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for warning-severity validation diagnostics.
pub trait DiagnosticsSink: Send + Sync {
    /// Records a validation warning.
    fn warn(&self, warning: &ValidationWarning);
}

/// Sink that writes warnings as JSON lines to stderr.
pub struct StderrDiagnosticsSink;

impl DiagnosticsSink for StderrDiagnosticsSink {
    fn warn(&self, warning: &ValidationWarning) {
        if let Ok(payload) = serde_json::to_string(warning) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Sink that discards warnings.
pub struct NoopDiagnosticsSink;

impl DiagnosticsSink for NoopDiagnosticsSink {
    fn warn(&self, _warning: &ValidationWarning) {}
}
