//! Default construction and key token tests for advanced-circuits-config.
// advanced-circuits-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults Tests
// Description: Validate default construction invariants and key tokens.
// Purpose: Ensure in-memory defaults match the documented baseline.
// =============================================================================

use advanced_circuits_config::Configuration;
use advanced_circuits_config::DartTrapConfig;
use advanced_circuits_config::ProfileKey;
use advanced_circuits_config::PumpConfig;
use advanced_circuits_config::SectionKey;
use advanced_circuits_config::StatueKind;

type TestResult = Result<(), String>;

#[test]
fn default_config_carries_documented_scalars() -> TestResult {
    let config = Configuration::default();
    if config.override_vanilla_circuits() {
        return Err("override_vanilla_circuits should default to false".to_string());
    }
    if !config.advanced_circuits_enabled() {
        return Err("advanced_circuits_enabled should default to true".to_string());
    }
    if config.max_dart_traps_per_circuit() != 10 {
        return Err("max_dart_traps_per_circuit should default to 10".to_string());
    }
    if config.max_statues_per_circuit() != 10 {
        return Err("max_statues_per_circuit should default to 10".to_string());
    }
    if config.max_pumps_per_circuit() != 4 {
        return Err("max_pumps_per_circuit should default to 4".to_string());
    }
    if config.max_circuit_length() != 400 {
        return Err("max_circuit_length should default to 400".to_string());
    }
    if config.boulder_wire_permission() != "advancedcircuits.wireboulder" {
        return Err("boulder_wire_permission default mismatch".to_string());
    }
    Ok(())
}

#[test]
fn default_config_has_exactly_one_default_pump_and_dart_trap_entry() -> TestResult {
    let config = Configuration::default();
    if config.pump_configs().len() != 1 {
        return Err("pump_configs should contain exactly one entry".to_string());
    }
    if config.pump_configs().get(ProfileKey::Default) != Some(&PumpConfig::default()) {
        return Err("pump_configs should carry the default pump under Default".to_string());
    }
    if config.dart_trap_configs().len() != 1 {
        return Err("dart_trap_configs should contain exactly one entry".to_string());
    }
    if config.dart_trap_configs().get(ProfileKey::Default) != Some(&DartTrapConfig::default()) {
        return Err("dart_trap_configs should carry the default trap under Default".to_string());
    }
    Ok(())
}

#[test]
fn default_config_has_no_statue_entries() -> TestResult {
    let config = Configuration::default();
    if !config.statue_configs().is_empty() {
        return Err("statue_configs should start empty".to_string());
    }
    Ok(())
}

#[test]
fn block_activator_defaults_are_documented_constants() -> TestResult {
    let config = Configuration::default();
    if config.block_activator_config().max_changeable_blocks != 100 {
        return Err("max_changeable_blocks should default to 100".to_string());
    }
    if config.block_activator_config().cooldown != 30 {
        return Err("block activator cooldown should default to 30".to_string());
    }
    Ok(())
}

#[test]
fn profile_tokens_round_trip() -> TestResult {
    for key in ProfileKey::ALL {
        if ProfileKey::from_token(key.token()) != Some(key) {
            return Err(format!("profile token {} does not round-trip", key.token()));
        }
    }
    if ProfileKey::from_token("FiveModifiers").is_some() {
        return Err("unknown profile token should not parse".to_string());
    }
    Ok(())
}

#[test]
fn statue_tokens_round_trip() -> TestResult {
    for kind in StatueKind::ALL {
        if StatueKind::from_token(kind.token()) != Some(kind) {
            return Err(format!("statue token {} does not round-trip", kind.token()));
        }
    }
    if StatueKind::from_token("Unicorn").is_some() {
        return Err("unknown statue token should not parse".to_string());
    }
    Ok(())
}
