//! Engine catalogs: tile, crop, item, and upgrade enumerations.
//!
//! The engine owns these tables; the client mirrors the names and ships
//! default crop economics that a JSON catalog file can replace wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Type of terrain on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileType {
    /// Plain grass, plantable once a fertility band reaches it.
    Grass,
    /// Tilled ground left behind by a harvest.
    Dirt,
    /// Outer (weakest) fertility band tier.
    FertilityBandOuter,
    /// Middle fertility band tier.
    FertilityBandMid,
    /// Inner (strongest) fertility band tier.
    FertilityBandInner,
    /// Scorched rows the band has not reached yet.
    Arid,
    /// The shop tile: seeds are bought and harvested goods sold here.
    GreenGrocer,
}

impl TileType {
    /// Check if this is the Green Grocer shop tile.
    #[must_use]
    pub const fn is_green_grocer(self) -> bool {
        matches!(self, TileType::GreenGrocer)
    }

    /// Check if this tile belongs to a fertility band tier.
    #[must_use]
    pub const fn is_fertility_band(self) -> bool {
        matches!(
            self,
            TileType::FertilityBandOuter
                | TileType::FertilityBandMid
                | TileType::FertilityBandInner
        )
    }
}

/// Crop species sold by the Green Grocer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CropType {
    /// Cheap starter crop.
    Potato,
    /// Early-game staple.
    Corn,
    /// Mid-tier crop.
    Grape,
    /// Mid-tier crop with a longer growth time.
    JoganFruit,
    /// Upper-mid-tier crop.
    Peanut,
    /// Premium crop short of the top tier.
    DuchamFruit,
    /// The top-tier crop.
    GoldenCorn,
}

impl CropType {
    /// All crop types, cheapest first.
    pub const ALL: [CropType; 7] = [
        CropType::Potato,
        CropType::Corn,
        CropType::Grape,
        CropType::JoganFruit,
        CropType::Peanut,
        CropType::DuchamFruit,
        CropType::GoldenCorn,
    ];
}

/// Consumable item equipped once at match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// No item.
    None,
    /// Extends move range for a stretch of turns.
    CoffeeThermos,
    /// Delivers a harvest to the Green Grocer remotely.
    DeliveryDrone,
    /// Waters nearby tiles, accelerating growth.
    RainTotem,
    /// Boosts fertility under the user.
    FertilityIdol,
    /// Destroys crops around a target.
    Pesticide,
    /// Blocks the opponent from harvesting nearby.
    Scarecrow,
}

/// Permanent upgrade equipped once at match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpgradeType {
    /// No upgrade.
    None,
    /// Larger move radius.
    LongerLegs,
    /// Larger harvest radius.
    LongerScythe,
    /// Larger plant radius.
    SeedAPult,
    /// Carry more harvested goods.
    BiggerMuscles,
}

/// Per-crop economics: what a seed costs, how long it grows, what it sells for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropEconomics {
    /// Seed price at the Green Grocer.
    pub seed_price: u32,
    /// Turns from planting to maturity.
    pub growth_time: u32,
    /// Sale value of one harvested unit.
    pub sale_value: u32,
}

/// Lookup table from crop type to its economics.
///
/// The engine is the authority on these numbers; the defaults here follow the
/// published tier ordering and can be replaced by a JSON catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropCatalog {
    /// Economics per crop type.
    crops: BTreeMap<CropType, CropEconomics>,
}

impl Default for CropCatalog {
    fn default() -> Self {
        let table = [
            (CropType::Potato, 10, 2, 25),
            (CropType::Corn, 25, 3, 70),
            (CropType::Grape, 50, 4, 150),
            (CropType::JoganFruit, 100, 5, 350),
            (CropType::Peanut, 150, 6, 500),
            (CropType::DuchamFruit, 300, 7, 1000),
            (CropType::GoldenCorn, 1000, 8, 5000),
        ];

        let crops = table
            .into_iter()
            .map(|(crop, seed_price, growth_time, sale_value)| {
                (
                    crop,
                    CropEconomics {
                        seed_price,
                        growth_time,
                        sale_value,
                    },
                )
            })
            .collect();

        Self { crops }
    }
}

impl CropCatalog {
    /// Get the economics for a crop.
    ///
    /// An unlisted crop reads as all-zero economics; a zero seed price marks
    /// a crop as unbuyable to the policy.
    #[must_use]
    pub fn get(&self, crop: CropType) -> CropEconomics {
        self.crops.get(&crop).copied().unwrap_or(CropEconomics {
            seed_price: 0,
            growth_time: 0,
            sale_value: 0,
        })
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
