//! Shared components, resources, events, and states for Tori's Tray.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly, except through the
//! pure functions each domain exports.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════
// WIZARD STAGE: top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, States, Default, Serialize, Deserialize,
)]
pub enum WizardStage {
    #[default]
    Start,
    ChooseRiceSoup,
    SidesIntro,
    FillSides,
    Decorate,
    Result,
}

impl WizardStage {
    pub const ALL: [WizardStage; 6] = [
        WizardStage::Start,
        WizardStage::ChooseRiceSoup,
        WizardStage::SidesIntro,
        WizardStage::FillSides,
        WizardStage::Decorate,
        WizardStage::Result,
    ];

    /// Which part of the food catalog the player can drag from at this stage.
    pub fn offered_categories(self) -> &'static [FoodCategory] {
        match self {
            WizardStage::ChooseRiceSoup => &[FoodCategory::Rice, FoodCategory::Soup],
            WizardStage::FillSides => &FoodCategory::SIDE_DISH,
            _ => &[],
        }
    }

    /// Stickers are only handed out while decorating.
    pub fn offers_stickers(self) -> bool {
        self == WizardStage::Decorate
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FOOD CATALOG
// ═══════════════════════════════════════════════════════════════════════

/// Unique identifier for every food in the catalog.
pub type FoodId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoodCategory {
    Rice,
    Soup,
    Vegetable,
    Meat,
    Fruit,
}

impl FoodCategory {
    /// The categories that count toward a balanced meal.
    pub const SIDE_DISH: [FoodCategory; 3] =
        [FoodCategory::Vegetable, FoodCategory::Meat, FoodCategory::Fruit];

    pub fn is_side_dish(self) -> bool {
        Self::SIDE_DISH.contains(&self)
    }

    pub fn label(self) -> &'static str {
        match self {
            FoodCategory::Rice => "rice",
            FoodCategory::Soup => "soup",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Meat => "meat/fish",
            FoodCategory::Fruit => "fruit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub category: FoodCategory,
    pub image_ref: String,
}

/// Every food the game knows about, in display order. Filled once by `DataPlugin`.
#[derive(Resource, Debug, Clone, Default)]
pub struct FoodCatalog {
    pub foods: Vec<FoodItem>,
}

impl FoodCatalog {
    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn of_categories<'a>(
        &'a self,
        categories: &'a [FoodCategory],
    ) -> impl Iterator<Item = &'a FoodItem> + 'a {
        self.foods
            .iter()
            .filter(move |f| categories.contains(&f.category))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerDef {
    pub id: String,
    pub name: String,
    pub glyph: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct StickerCatalog {
    pub stickers: Vec<StickerDef>,
}

impl StickerCatalog {
    pub fn get(&self, id: &str) -> Option<&StickerDef> {
        self.stickers.iter().find(|s| s.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TRAY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SlotId {
    Rice,
    Soup,
    Side1,
    Side2,
    Side3,
    Side4,
}

impl SlotId {
    pub const ALL: [SlotId; 6] = [
        SlotId::Rice,
        SlotId::Soup,
        SlotId::Side1,
        SlotId::Side2,
        SlotId::Side3,
        SlotId::Side4,
    ];

    pub const SIDES: [SlotId; 4] = [SlotId::Side1, SlotId::Side2, SlotId::Side3, SlotId::Side4];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::Rice => "rice",
            SlotId::Soup => "soup",
            SlotId::Side1 => "side1",
            SlotId::Side2 => "side2",
            SlotId::Side3 => "side3",
            SlotId::Side4 => "side4",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown slot `{0}` (expected rice, soup, side1..side4)")]
pub struct UnknownSlot(pub String);

impl FromStr for SlotId {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlotId::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSlot(s.to_string()))
    }
}

/// The six-slot meal tray. Only the placement engine in `crate::tray` mutates it.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tray {
    pub rice: Option<FoodItem>,
    pub soup: Option<FoodItem>,
    pub side1: Option<FoodItem>,
    pub side2: Option<FoodItem>,
    pub side3: Option<FoodItem>,
    pub side4: Option<FoodItem>,
}

impl Tray {
    pub fn get(&self, slot: SlotId) -> Option<&FoodItem> {
        match slot {
            SlotId::Rice => self.rice.as_ref(),
            SlotId::Soup => self.soup.as_ref(),
            SlotId::Side1 => self.side1.as_ref(),
            SlotId::Side2 => self.side2.as_ref(),
            SlotId::Side3 => self.side3.as_ref(),
            SlotId::Side4 => self.side4.as_ref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: SlotId) -> &mut Option<FoodItem> {
        match slot {
            SlotId::Rice => &mut self.rice,
            SlotId::Soup => &mut self.soup,
            SlotId::Side1 => &mut self.side1,
            SlotId::Side2 => &mut self.side2,
            SlotId::Side3 => &mut self.side3,
            SlotId::Side4 => &mut self.side4,
        }
    }

    pub fn is_occupied(&self, slot: SlotId) -> bool {
        self.get(slot).is_some()
    }

    /// Occupied side slots, in slot order.
    pub fn side_dishes(&self) -> impl Iterator<Item = &FoodItem> + '_ {
        SlotId::SIDES.into_iter().filter_map(|slot| self.get(slot))
    }

    pub fn slot_of(&self, food_id: &str) -> Option<SlotId> {
        SlotId::ALL
            .into_iter()
            .find(|&slot| self.get(slot).is_some_and(|f| f.id == food_id))
    }

    pub fn is_empty(&self) -> bool {
        SlotId::ALL.into_iter().all(|slot| !self.is_occupied(slot))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// DECORATIONS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationMark {
    /// Offsets relative to the slot's drawable area; never validated.
    pub offset_x: f32,
    pub offset_y: f32,
    pub glyph: String,
}

/// Sticker marks per slot, in paint order. Only occupied slots ever get marks.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecorationOverlay {
    pub marks: BTreeMap<SlotId, Vec<DecorationMark>>,
}

// ═══════════════════════════════════════════════════════════════════════
// BALANCE
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceVerdict {
    pub is_balanced: bool,
    /// Subset of `FoodCategory::SIDE_DISH`; empty iff balanced.
    pub missing: BTreeSet<FoodCategory>,
}

/// Verdict from the last time the Result stage was entered.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CurrentVerdict(pub Option<BalanceVerdict>);

// ═══════════════════════════════════════════════════════════════════════
// MASCOT
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MascotMood {
    Happy,
    Normal,
    Thinking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narration {
    pub mood: MascotMood,
    pub line: String,
}

/// Name the mascot uses in narration.
#[derive(Resource, Debug, Clone)]
pub struct MascotName(pub String);

impl Default for MascotName {
    fn default() -> Self {
        Self(DEFAULT_MASCOT_NAME.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// A food dragged from the catalog and dropped on a slot.
#[derive(Event, Debug, Clone)]
pub struct FoodDropEvent {
    pub food_id: FoodId,
    pub slot: SlotId,
}

/// The player tapped a food on the tray to take it off.
#[derive(Event, Debug, Clone)]
pub struct RemoveFoodEvent {
    pub slot: SlotId,
}

/// A sticker dropped onto a slot at a raw offset.
#[derive(Event, Debug, Clone)]
pub struct StickerDropEvent {
    pub sticker_id: String,
    pub slot: SlotId,
    pub offset_x: f32,
    pub offset_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardAction {
    /// The stage's "continue" button.
    Confirm,
    /// "Pick the side dishes again" after an unbalanced result.
    RedoSides,
    /// "Make a new one": back to Start with an empty tray.
    Restart,
}

#[derive(Event, Debug, Clone)]
pub struct WizardActionEvent {
    pub action: WizardAction,
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEM ORDERING
// ═══════════════════════════════════════════════════════════════════════

/// Tray edits land before stickers, stickers before stage changes, so a
/// single frame sees a consistent tray when evaluating the meal.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionSet {
    Tray,
    Decorate,
    Wizard,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const DEFAULT_MASCOT_NAME: &str = "Tori";

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, category: FoodCategory) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            image_ref: String::new(),
        }
    }

    #[test]
    fn test_slot_id_parses_case_insensitively() {
        assert_eq!("rice".parse::<SlotId>(), Ok(SlotId::Rice));
        assert_eq!("SIDE3".parse::<SlotId>(), Ok(SlotId::Side3));
        assert_eq!(
            "side5".parse::<SlotId>(),
            Err(UnknownSlot("side5".to_string()))
        );
    }

    #[test]
    fn test_slot_id_display_round_trips_through_parse() {
        for slot in SlotId::ALL {
            assert_eq!(slot.to_string().parse::<SlotId>(), Ok(slot));
        }
    }

    #[test]
    fn test_new_tray_is_empty() {
        let tray = Tray::default();
        assert!(tray.is_empty());
        assert_eq!(tray.side_dishes().count(), 0);
    }

    #[test]
    fn test_slot_of_finds_food_by_id() {
        let tray = Tray {
            side3: Some(food("veg-1", FoodCategory::Vegetable)),
            ..default()
        };
        assert_eq!(tray.slot_of("veg-1"), Some(SlotId::Side3));
        assert_eq!(tray.slot_of("veg-2"), None);
    }

    #[test]
    fn test_offered_categories_per_stage() {
        assert!(WizardStage::Start.offered_categories().is_empty());
        assert_eq!(
            WizardStage::ChooseRiceSoup.offered_categories(),
            &[FoodCategory::Rice, FoodCategory::Soup]
        );
        assert_eq!(
            WizardStage::FillSides.offered_categories(),
            &FoodCategory::SIDE_DISH
        );
        assert!(WizardStage::Decorate.offered_categories().is_empty());
        assert!(WizardStage::Decorate.offers_stickers());
        assert!(!WizardStage::FillSides.offers_stickers());
    }

    #[test]
    fn test_catalog_filter_keeps_catalog_order() {
        let catalog = FoodCatalog {
            foods: vec![
                food("rice-1", FoodCategory::Rice),
                food("fruit-1", FoodCategory::Fruit),
                food("soup-1", FoodCategory::Soup),
                food("rice-2", FoodCategory::Rice),
            ],
        };
        let ids: Vec<&str> = catalog
            .of_categories(&[FoodCategory::Rice, FoodCategory::Soup])
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["rice-1", "soup-1", "rice-2"]);
    }
}
