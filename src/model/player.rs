//! Per-player state as observed in a snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{CropType, ItemType, UpgradeType};
use crate::model::Position;

/// One harvested crop carried toward the Green Grocer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestedCrop {
    /// Crop species.
    #[serde(rename = "type")]
    pub crop_type: CropType,
    /// Sale value at the Green Grocer.
    pub value: u32,
}

/// A player's state for one turn.
///
/// All quantities are engine-authoritative; the client never mutates them,
/// it only observes the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Display name assigned by the engine.
    pub name: String,
    /// Current board position.
    pub position: Position,
    /// Money on hand.
    pub money: u32,
    /// Seeds held, per crop type. Absent crops read as zero.
    #[serde(default)]
    pub seed_inventory: BTreeMap<CropType, u32>,
    /// Harvested goods not yet sold.
    #[serde(default)]
    pub harvested_inventory: Vec<HarvestedCrop>,
    /// Maximum distance of a single move.
    pub move_radius: u16,
    /// Maximum distance at which tiles can be harvested.
    pub harvest_radius: u16,
    /// Maximum distance at which tiles can be planted.
    pub plant_radius: u16,
    /// Item equipped at match start.
    #[serde(default = "default_item")]
    pub item: ItemType,
    /// Upgrade equipped at match start.
    #[serde(default = "default_upgrade")]
    pub upgrade: UpgradeType,
}

const fn default_item() -> ItemType {
    ItemType::None
}

const fn default_upgrade() -> UpgradeType {
    UpgradeType::None
}
