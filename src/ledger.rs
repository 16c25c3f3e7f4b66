//! Read-only resource accounting over a player and the crop catalog.

use crate::catalog::{CropCatalog, CropEconomics, CropType};
use crate::model::Player;

/// A read view composing a player's live inventory with crop economics.
///
/// The ledger never writes: money and inventories are mutated engine-side
/// and observed in the next snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ResourceLedger<'a> {
    player: &'a Player,
    catalog: &'a CropCatalog,
}

impl<'a> ResourceLedger<'a> {
    /// Create a ledger over one player.
    #[must_use]
    pub const fn new(player: &'a Player, catalog: &'a CropCatalog) -> Self {
        Self { player, catalog }
    }

    /// Money on hand.
    #[must_use]
    pub const fn money(&self) -> u32 {
        self.player.money
    }

    /// Total seeds held across all crop types.
    #[must_use]
    pub fn total_seeds(&self) -> u32 {
        self.player.seed_inventory.values().sum()
    }

    /// Seeds held of one crop type.
    #[must_use]
    pub fn seed_count(&self, crop: CropType) -> u32 {
        self.player.seed_inventory.get(&crop).copied().unwrap_or(0)
    }

    /// Check if at least one seed of the crop is held.
    #[must_use]
    pub fn has_seed(&self, crop: CropType) -> bool {
        self.seed_count(crop) > 0
    }

    /// Harvested goods currently carried.
    #[must_use]
    pub fn harvested_count(&self) -> usize {
        self.player.harvested_inventory.len()
    }

    /// Economics of a crop, from the catalog.
    #[must_use]
    pub fn economics(&self, crop: CropType) -> CropEconomics {
        self.catalog.get(crop)
    }

    /// Check if the player can pay for `count` seeds of the crop.
    #[must_use]
    pub fn can_afford(&self, crop: CropType, count: u32) -> bool {
        let price = u64::from(self.catalog.get(crop).seed_price);
        u64::from(self.player.money) >= price * u64::from(count)
    }

    /// How many seeds of the crop the player's money covers.
    ///
    /// A crop with zero price is unbuyable and reads as zero.
    #[must_use]
    pub fn affordable_count(&self, crop: CropType) -> u32 {
        let price = self.catalog.get(crop).seed_price;
        if price == 0 {
            return 0;
        }
        self.player.money / price
    }

    /// [`Self::affordable_count`] capped at a policy batch limit.
    #[must_use]
    pub fn affordable_count_capped(&self, crop: CropType, cap: u32) -> u32 {
        self.affordable_count(crop).min(cap)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::catalog::{ItemType, UpgradeType};
    use crate::model::{HarvestedCrop, Position};

    fn player_with(money: u32, seeds: &[(CropType, u32)]) -> Player {
        Player {
            name: "test".to_string(),
            position: Position::new(0, 0),
            money,
            seed_inventory: seeds.iter().copied().collect::<BTreeMap<_, _>>(),
            harvested_inventory: Vec::new(),
            move_radius: 10,
            harvest_radius: 2,
            plant_radius: 1,
            item: ItemType::None,
            upgrade: UpgradeType::None,
        }
    }

    #[test]
    fn test_seed_totals() {
        let catalog = CropCatalog::default();
        let player = player_with(0, &[(CropType::Potato, 2), (CropType::Corn, 3)]);
        let ledger = ResourceLedger::new(&player, &catalog);

        assert_eq!(ledger.total_seeds(), 5);
        assert_eq!(ledger.seed_count(CropType::Corn), 3);
        assert_eq!(ledger.seed_count(CropType::Grape), 0);
        assert!(ledger.has_seed(CropType::Potato));
        assert!(!ledger.has_seed(CropType::GoldenCorn));
    }

    #[test]
    fn test_affordability() {
        let catalog = CropCatalog::default();
        let player = player_with(500, &[]);
        let ledger = ResourceLedger::new(&player, &catalog);

        // Potato seeds cost 10 by default.
        assert!(ledger.can_afford(CropType::Potato, 50));
        assert!(!ledger.can_afford(CropType::Potato, 51));
        assert_eq!(ledger.affordable_count(CropType::Potato), 50);
        assert_eq!(ledger.affordable_count_capped(CropType::Potato, 20), 20);
        assert_eq!(ledger.affordable_count(CropType::GoldenCorn), 0);
    }

    #[test]
    fn test_zero_price_is_unbuyable() {
        let catalog = CropCatalog::from_json(r#"{"crops":{}}"#).unwrap();
        let player = player_with(1_000_000, &[]);
        let ledger = ResourceLedger::new(&player, &catalog);

        assert_eq!(ledger.affordable_count(CropType::Potato), 0);
        // Zero of a free crop is still "affordable"; the policy skips the
        // buy on the count, not here.
        assert!(ledger.can_afford(CropType::Potato, 0));
    }

    #[test]
    fn test_harvested_count() {
        let catalog = CropCatalog::default();
        let mut player = player_with(0, &[]);
        player.harvested_inventory.push(HarvestedCrop {
            crop_type: CropType::Corn,
            value: 70,
        });
        let ledger = ResourceLedger::new(&player, &catalog);
        assert_eq!(ledger.harvested_count(), 1);
    }
}
