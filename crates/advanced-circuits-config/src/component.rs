// advanced-circuits-config/src/component.rs
// ============================================================================
// Module: Component Sub-Configs
// Description: Per-component configuration records and their keys.
// Purpose: Typed models parsed from pre-validated document nodes.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Each simulated component type (block activator, pump, dart trap, statue)
//! has a flat configuration record with built-in defaults and a `from_node`
//! constructor that reads required members via the primitive parsers. Pump
//! and dart trap records are keyed by [`ProfileKey`]; statue records are
//! keyed by [`StatueKind`]. Both key enums are closed sets: unknown document
//! tokens are a hard format failure, never silently ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::config::ConfigError;
use crate::parse::parse_optional_string;
use crate::parse::parse_u32;
use crate::parse::require_member;
use crate::section::SectionKey;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default maximum blocks a block activator changes per trigger.
const DEFAULT_MAX_CHANGEABLE_BLOCKS: u32 = 100;
/// Default block activator cooldown in ticks.
const DEFAULT_BLOCK_ACTIVATOR_COOLDOWN: u32 = 30;
/// Default water volume a pump transfers per trigger.
const DEFAULT_TRANSFERABLE_WATER: u32 = 10;
/// Default lava volume a pump transfers per trigger.
const DEFAULT_TRANSFERABLE_LAVA: u32 = 10;
/// Default pump cooldown in ticks.
const DEFAULT_PUMP_COOLDOWN: u32 = 0;
/// Default dart trap projectile type identifier.
const DEFAULT_PROJECTILE_TYPE: u32 = 98;
/// Default dart trap projectile damage.
const DEFAULT_PROJECTILE_DAMAGE: u32 = 20;
/// Default dart trap projectile speed.
const DEFAULT_PROJECTILE_SPEED: u32 = 12;
/// Default dart trap cooldown in ticks.
const DEFAULT_DART_TRAP_COOLDOWN: u32 = 180;
/// Default statue player check range in tiles (0 disables the check).
const DEFAULT_PLAYER_CHECK_RANGE: u32 = 0;
/// Default statue cooldown in ticks.
const DEFAULT_STATUE_COOLDOWN: u32 = 0;

// ============================================================================
// SECTION: Section Keys
// ============================================================================

/// Configuration profile selecting which pump or dart trap override applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileKey {
    /// Baseline profile applied when a component carries no modifiers.
    Default,
    /// Profile for components carrying one modifier.
    OneModifier,
    /// Profile for components carrying two modifiers.
    TwoModifiers,
    /// Profile for components carrying three modifiers.
    ThreeModifiers,
    /// Profile for components carrying four modifiers.
    FourModifiers,
}

impl ProfileKey {
    /// All profile keys in token order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::OneModifier,
        Self::TwoModifiers,
        Self::ThreeModifiers,
        Self::FourModifiers,
    ];

    /// Parses a document token into a profile key.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Default" => Some(Self::Default),
            "OneModifier" => Some(Self::OneModifier),
            "TwoModifiers" => Some(Self::TwoModifiers),
            "ThreeModifiers" => Some(Self::ThreeModifiers),
            "FourModifiers" => Some(Self::FourModifiers),
            _ => None,
        }
    }
}

impl SectionKey for ProfileKey {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::OneModifier => "OneModifier",
            Self::TwoModifiers => "TwoModifiers",
            Self::ThreeModifiers => "ThreeModifiers",
            Self::FourModifiers => "FourModifiers",
        }
    }
}

/// Statue type identifier with independent per-kind configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatueKind {
    /// Angel statue.
    Angel,
    /// Bat statue.
    Bat,
    /// Bird statue.
    Bird,
    /// Bomb statue.
    Bomb,
    /// Chest statue.
    Chest,
    /// Crab statue.
    Crab,
    /// Fish statue.
    Fish,
    /// Goblin statue.
    Goblin,
    /// Heart statue.
    Heart,
    /// King statue.
    King,
    /// Mushroom statue.
    Mushroom,
    /// Piranha statue.
    Piranha,
    /// Queen statue.
    Queen,
    /// Shark statue.
    Shark,
    /// Skeleton statue.
    Skeleton,
    /// Slime statue.
    Slime,
    /// Star statue.
    Star,
}

impl StatueKind {
    /// All statue kinds in token order.
    pub const ALL: [Self; 17] = [
        Self::Angel,
        Self::Bat,
        Self::Bird,
        Self::Bomb,
        Self::Chest,
        Self::Crab,
        Self::Fish,
        Self::Goblin,
        Self::Heart,
        Self::King,
        Self::Mushroom,
        Self::Piranha,
        Self::Queen,
        Self::Shark,
        Self::Skeleton,
        Self::Slime,
        Self::Star,
    ];

    /// Parses a document token into a statue kind.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Angel" => Some(Self::Angel),
            "Bat" => Some(Self::Bat),
            "Bird" => Some(Self::Bird),
            "Bomb" => Some(Self::Bomb),
            "Chest" => Some(Self::Chest),
            "Crab" => Some(Self::Crab),
            "Fish" => Some(Self::Fish),
            "Goblin" => Some(Self::Goblin),
            "Heart" => Some(Self::Heart),
            "King" => Some(Self::King),
            "Mushroom" => Some(Self::Mushroom),
            "Piranha" => Some(Self::Piranha),
            "Queen" => Some(Self::Queen),
            "Shark" => Some(Self::Shark),
            "Skeleton" => Some(Self::Skeleton),
            "Slime" => Some(Self::Slime),
            "Star" => Some(Self::Star),
            _ => None,
        }
    }
}

impl SectionKey for StatueKind {
    fn token(self) -> &'static str {
        match self {
            Self::Angel => "Angel",
            Self::Bat => "Bat",
            Self::Bird => "Bird",
            Self::Bomb => "Bomb",
            Self::Chest => "Chest",
            Self::Crab => "Crab",
            Self::Fish => "Fish",
            Self::Goblin => "Goblin",
            Self::Heart => "Heart",
            Self::King => "King",
            Self::Mushroom => "Mushroom",
            Self::Piranha => "Piranha",
            Self::Queen => "Queen",
            Self::Shark => "Shark",
            Self::Skeleton => "Skeleton",
            Self::Slime => "Slime",
            Self::Star => "Star",
        }
    }
}

// ============================================================================
// SECTION: Sub-Config Models
// ============================================================================

/// Behavior settings for block activator components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockActivatorConfig {
    /// Maximum number of blocks changed by one trigger.
    pub max_changeable_blocks: u32,
    /// Ticks the activator stays inert after triggering.
    pub cooldown: u32,
}

impl Default for BlockActivatorConfig {
    fn default() -> Self {
        Self {
            max_changeable_blocks: DEFAULT_MAX_CHANGEABLE_BLOCKS,
            cooldown: DEFAULT_BLOCK_ACTIVATOR_COOLDOWN,
        }
    }
}

impl BlockActivatorConfig {
    /// Parses a block activator node that already passed schema validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] when a required member is absent or
    /// fails type coercion.
    pub fn from_node(node: &Map<String, Value>) -> Result<Self, ConfigError> {
        Ok(Self {
            max_changeable_blocks: parse_u32(
                "MaxChangeableBlocks",
                require_member(node, "MaxChangeableBlocks")?,
            )?,
            cooldown: parse_u32("Cooldown", require_member(node, "Cooldown")?)?,
        })
    }
}

/// Behavior settings for pump components under one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PumpConfig {
    /// Water volume transferred per trigger.
    pub transferable_water: u32,
    /// Lava volume transferred per trigger.
    pub transferable_lava: u32,
    /// Ticks the pump stays inert after triggering.
    pub cooldown: u32,
    /// Permission node required to trigger the pump, if any.
    pub trigger_permission: Option<String>,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            transferable_water: DEFAULT_TRANSFERABLE_WATER,
            transferable_lava: DEFAULT_TRANSFERABLE_LAVA,
            cooldown: DEFAULT_PUMP_COOLDOWN,
            trigger_permission: None,
        }
    }
}

impl PumpConfig {
    /// Parses a pump node that already passed schema validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] when a required member is absent or
    /// fails type coercion.
    pub fn from_node(node: &Map<String, Value>) -> Result<Self, ConfigError> {
        Ok(Self {
            transferable_water: parse_u32(
                "TransferableWater",
                require_member(node, "TransferableWater")?,
            )?,
            transferable_lava: parse_u32(
                "TransferableLava",
                require_member(node, "TransferableLava")?,
            )?,
            cooldown: parse_u32("Cooldown", require_member(node, "Cooldown")?)?,
            trigger_permission: optional_permission(node)?,
        })
    }
}

/// Behavior settings for dart trap components under one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartTrapConfig {
    /// Projectile type identifier fired by the trap.
    pub projectile_type: u32,
    /// Damage dealt by a fired projectile.
    pub projectile_damage: u32,
    /// Speed of a fired projectile.
    pub projectile_speed: u32,
    /// Ticks the trap stays inert after triggering.
    pub cooldown: u32,
    /// Permission node required to trigger the trap, if any.
    pub trigger_permission: Option<String>,
}

impl Default for DartTrapConfig {
    fn default() -> Self {
        Self {
            projectile_type: DEFAULT_PROJECTILE_TYPE,
            projectile_damage: DEFAULT_PROJECTILE_DAMAGE,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            cooldown: DEFAULT_DART_TRAP_COOLDOWN,
            trigger_permission: None,
        }
    }
}

impl DartTrapConfig {
    /// Parses a dart trap node that already passed schema validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] when a required member is absent or
    /// fails type coercion.
    pub fn from_node(node: &Map<String, Value>) -> Result<Self, ConfigError> {
        Ok(Self {
            projectile_type: parse_u32("ProjectileType", require_member(node, "ProjectileType")?)?,
            projectile_damage: parse_u32(
                "ProjectileDamage",
                require_member(node, "ProjectileDamage")?,
            )?,
            projectile_speed: parse_u32(
                "ProjectileSpeed",
                require_member(node, "ProjectileSpeed")?,
            )?,
            cooldown: parse_u32("Cooldown", require_member(node, "Cooldown")?)?,
            trigger_permission: optional_permission(node)?,
        })
    }
}

/// Behavior settings for one statue kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatueConfig {
    /// Tile range checked for nearby players before acting (0 disables).
    pub player_check_range: u32,
    /// Ticks the statue stays inert after triggering.
    pub cooldown: u32,
    /// Permission node required to trigger the statue, if any.
    pub trigger_permission: Option<String>,
}

impl Default for StatueConfig {
    fn default() -> Self {
        Self {
            player_check_range: DEFAULT_PLAYER_CHECK_RANGE,
            cooldown: DEFAULT_STATUE_COOLDOWN,
            trigger_permission: None,
        }
    }
}

impl StatueConfig {
    /// Parses a statue node that already passed schema validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Format`] when a required member is absent or
    /// fails type coercion.
    pub fn from_node(node: &Map<String, Value>) -> Result<Self, ConfigError> {
        Ok(Self {
            player_check_range: parse_u32(
                "PlayerCheckRange",
                require_member(node, "PlayerCheckRange")?,
            )?,
            cooldown: parse_u32("Cooldown", require_member(node, "Cooldown")?)?,
            trigger_permission: optional_permission(node)?,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads the optional `TriggerPermission` member, treating absence and null alike.
fn optional_permission(node: &Map<String, Value>) -> Result<Option<String>, ConfigError> {
    match node.get("TriggerPermission") {
        None => Ok(None),
        Some(value) => parse_optional_string("TriggerPermission", value),
    }
}
