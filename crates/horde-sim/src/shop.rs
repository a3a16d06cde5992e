//! Shop economy: cash, purchases, and the placement inventory.
//!
//! The shop never touches the world. Structures bought here wait in the
//! inventory until the engine validates a placement and spawns them.

use glam::Vec2;
use thiserror::Error;

use horde_core::constants::{PLACEMENT_FOOTPRINT, STARTING_CASH};
use horde_core::enums::{ShopItem, StructureKind};
use horde_core::profiles::shop_price;
use horde_core::types::Aabb;

/// Why a shop action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("need {needed} cash, have {available}")]
    InsufficientFunds { needed: u32, available: u32 },
    #[error("inventory slot {0} is empty")]
    EmptySlot(usize),
    #[error("placement overlaps an existing structure")]
    PlacementBlocked,
    #[error("placement footprint leaves the world")]
    OutOfBounds,
    #[error("{0:?} cannot be placed")]
    NotPlaceable(ShopItem),
}

/// Cash balance and purchased-but-unplaced structures.
#[derive(Debug, Clone)]
pub struct Shop {
    cash: u32,
    inventory: Vec<ShopItem>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(STARTING_CASH)
    }
}

impl Shop {
    pub fn new(cash: u32) -> Self {
        Self {
            cash,
            inventory: Vec::new(),
        }
    }

    /// Everything for sale.
    pub fn catalog() -> &'static [ShopItem] {
        &ShopItem::ALL
    }

    pub fn price(item: ShopItem) -> u32 {
        shop_price(item)
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    pub fn inventory(&self) -> &[ShopItem] {
        &self.inventory
    }

    /// Buy an item. Placeable structures go to the inventory; consumables
    /// are only paid for here and delivered by the caller.
    pub fn purchase(&mut self, item: ShopItem) -> Result<(), ShopError> {
        let price = shop_price(item);
        if self.cash < price {
            return Err(ShopError::InsufficientFunds {
                needed: price,
                available: self.cash,
            });
        }
        self.cash -= price;
        if item.structure().is_some() {
            self.inventory.push(item);
        }
        Ok(())
    }

    /// Footprint a placement at `center` would occupy.
    pub fn footprint(center: Vec2) -> Aabb {
        Aabb::from_center(center, Vec2::splat(PLACEMENT_FOOTPRINT))
    }

    /// Remove the structure in `slot` for placement at `center`. The
    /// footprint must lie inside the world and must not overlap `occupied`.
    /// The inventory is untouched on failure.
    pub fn take_for_placement(
        &mut self,
        slot: usize,
        center: Vec2,
        world_size: Vec2,
        occupied: &[Aabb],
    ) -> Result<StructureKind, ShopError> {
        let item = *self.inventory.get(slot).ok_or(ShopError::EmptySlot(slot))?;
        let kind = item.structure().ok_or(ShopError::NotPlaceable(item))?;

        let footprint = Self::footprint(center);
        let (min, max) = (footprint.min(), footprint.max());
        if min.x < 0.0 || min.y < 0.0 || max.x > world_size.x || max.y > world_size.y {
            return Err(ShopError::OutOfBounds);
        }
        if occupied.iter().any(|other| footprint.intersects(other)) {
            return Err(ShopError::PlacementBlocked);
        }

        self.inventory.remove(slot);
        Ok(kind)
    }

    /// Credit a kill reward.
    pub fn grant(&mut self, amount: u32) {
        self.cash = self.cash.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: Vec2 = Vec2::new(3840.0, 2160.0);

    #[test]
    fn purchase_deducts_and_stocks() {
        let mut shop = Shop::new(500);
        shop.purchase(ShopItem::Wall).unwrap();
        assert_eq!(shop.cash(), 400);
        assert_eq!(shop.inventory(), &[ShopItem::Wall]);

        shop.purchase(ShopItem::Grenade).unwrap();
        assert_eq!(shop.cash(), 350);
        assert_eq!(shop.inventory().len(), 1, "consumables skip the inventory");
    }

    #[test]
    fn purchase_rejects_when_broke() {
        let mut shop = Shop::new(120);
        let err = shop.purchase(ShopItem::BasicTurret).unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientFunds {
                needed: 300,
                available: 120
            }
        );
        assert_eq!(shop.cash(), 120);
        assert!(shop.inventory().is_empty());
    }

    #[test]
    fn placement_checks_bounds_and_overlap() {
        let mut shop = Shop::new(1000);
        shop.purchase(ShopItem::SpikeTrap).unwrap();

        assert_eq!(
            shop.take_for_placement(0, Vec2::new(10.0, 500.0), WORLD, &[]),
            Err(ShopError::OutOfBounds)
        );
        let existing = [Shop::footprint(Vec2::new(500.0, 500.0))];
        assert_eq!(
            shop.take_for_placement(0, Vec2::new(520.0, 510.0), WORLD, &existing),
            Err(ShopError::PlacementBlocked)
        );
        assert_eq!(shop.inventory().len(), 1, "failed placement keeps the item");

        assert_eq!(
            shop.take_for_placement(0, Vec2::new(540.0, 500.0), WORLD, &existing),
            Ok(StructureKind::SpikeTrap),
            "edge-touching footprints do not overlap"
        );
        assert!(shop.inventory().is_empty());
        assert_eq!(
            shop.take_for_placement(0, Vec2::new(900.0, 900.0), WORLD, &[]),
            Err(ShopError::EmptySlot(0))
        );
    }

    #[test]
    fn grant_adds_cash() {
        let mut shop = Shop::default();
        shop.grant(25);
        assert_eq!(shop.cash(), STARTING_CASH + 25);
    }
}
