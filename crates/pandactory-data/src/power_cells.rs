//! The three power cell tiers. Bonuses are additive production
//! multipliers; drop weights drive the weighted roll on expedition
//! rewards.

use pandactory_core::catalog::{CatalogBuilder, PowerCellDef};
use pandactory_core::id::PowerCellTier;

pub(crate) fn register(b: &mut CatalogBuilder) {
    b.power_cell(PowerCellDef {
        tier: PowerCellTier::Green,
        name: "Power Cell (Green)".to_string(),
        bonus: 0.50,
        drop_weight: 70.0,
    })
    .power_cell(PowerCellDef {
        tier: PowerCellTier::Blue,
        name: "Power Cell (Blue)".to_string(),
        bonus: 1.00,
        drop_weight: 25.0,
    })
    .power_cell(PowerCellDef {
        tier: PowerCellTier::Orange,
        name: "Power Cell (Orange)".to_string(),
        bonus: 1.50,
        drop_weight: 5.0,
    });
}
