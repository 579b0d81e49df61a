//! Placement engine: which food may sit in which slot, and how a food
//! already on the tray moves when it is dropped somewhere else.

use crate::shared::*;

/// Result of a drop onto the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The food landed. `vacated` is the slot it moved out of, if it was
    /// already on the tray.
    Placed { vacated: Option<SlotId> },
    /// The slot does not take this category. Tray unchanged.
    WrongCategory,
    /// The slot already holds a food. Tray unchanged.
    SlotOccupied,
}

impl Placement {
    pub fn landed(self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Rice only in the rice bowl, soup only in the soup bowl, side dishes only
/// in the four side compartments.
pub fn slot_accepts(slot: SlotId, category: FoodCategory) -> bool {
    match slot {
        SlotId::Rice => category == FoodCategory::Rice,
        SlotId::Soup => category == FoodCategory::Soup,
        SlotId::Side1 | SlotId::Side2 | SlotId::Side3 | SlotId::Side4 => category.is_side_dish(),
    }
}

impl Tray {
    /// Drop `food` on `slot`. A food id occupies at most one slot, so a food
    /// that is already elsewhere on the tray moves rather than duplicates.
    pub fn place(&mut self, slot: SlotId, food: &FoodItem) -> Placement {
        if !slot_accepts(slot, food.category) {
            return Placement::WrongCategory;
        }
        if self.is_occupied(slot) {
            return Placement::SlotOccupied;
        }

        let vacated = self.slot_of(&food.id);
        if let Some(previous) = vacated {
            *self.slot_mut(previous) = None;
        }
        *self.slot_mut(slot) = Some(food.clone());
        Placement::Placed { vacated }
    }

    /// Take whatever is in `slot` off the tray. Emptying an empty slot is fine.
    pub fn remove(&mut self, slot: SlotId) -> Option<FoodItem> {
        self.slot_mut(slot).take()
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        *self = Tray::default();
    }
}

/// Place a food and keep the overlay in step: a food that moves leaves its
/// stickers behind on the old slot, and those are cleared.
pub fn place_food(
    tray: &mut Tray,
    overlay: &mut DecorationOverlay,
    slot: SlotId,
    food: &FoodItem,
) -> Placement {
    let placement = tray.place(slot, food);
    if let Placement::Placed { vacated: Some(previous) } = placement {
        overlay.clear_slot(previous);
    }
    placement
}

/// Remove a food together with every sticker on its slot.
pub fn remove_food(
    tray: &mut Tray,
    overlay: &mut DecorationOverlay,
    slot: SlotId,
) -> Option<FoodItem> {
    overlay.clear_slot(slot);
    tray.remove(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const CATEGORIES: [FoodCategory; 5] = [
        FoodCategory::Rice,
        FoodCategory::Soup,
        FoodCategory::Vegetable,
        FoodCategory::Meat,
        FoodCategory::Fruit,
    ];

    fn food(id: &str, category: FoodCategory) -> FoodItem {
        FoodItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            image_ref: String::new(),
        }
    }

    fn sticker(glyph: &str) -> DecorationMark {
        DecorationMark {
            offset_x: 10.0,
            offset_y: 20.0,
            glyph: glyph.to_string(),
        }
    }

    fn assert_single_occupancy(tray: &Tray) {
        let mut seen = HashSet::new();
        for slot in SlotId::ALL {
            if let Some(f) = tray.get(slot) {
                assert!(seen.insert(f.id.clone()), "{} is on the tray twice", f.id);
            }
        }
    }

    #[test]
    fn test_slot_acceptance_matrix() {
        for slot in SlotId::ALL {
            for category in CATEGORIES {
                let expected = match slot {
                    SlotId::Rice => category == FoodCategory::Rice,
                    SlotId::Soup => category == FoodCategory::Soup,
                    _ => !matches!(category, FoodCategory::Rice | FoodCategory::Soup),
                };
                assert_eq!(
                    slot_accepts(slot, category),
                    expected,
                    "{:?} in {:?}",
                    category,
                    slot
                );
            }
        }
    }

    #[test]
    fn test_place_changes_tray_only_when_legal_and_empty() {
        for slot in SlotId::ALL {
            for category in CATEGORIES {
                let mut tray = Tray::default();
                let before = tray.clone();
                let outcome = tray.place(slot, &food("x", category));
                if slot_accepts(slot, category) {
                    assert_eq!(outcome, Placement::Placed { vacated: None });
                    assert_eq!(tray.get(slot).map(|f| f.id.as_str()), Some("x"));
                } else {
                    assert_eq!(outcome, Placement::WrongCategory);
                    assert_eq!(tray, before);
                }
            }
        }
    }

    #[test]
    fn test_drop_on_occupied_slot_is_ignored() {
        let mut tray = Tray::default();
        tray.place(SlotId::Side1, &food("veg-1", FoodCategory::Vegetable));
        let before = tray.clone();

        let outcome = tray.place(SlotId::Side1, &food("meat-1", FoodCategory::Meat));

        assert_eq!(outcome, Placement::SlotOccupied);
        assert_eq!(tray, before);
    }

    #[test]
    fn test_wrong_category_drop_does_not_move_existing_food() {
        let mut tray = Tray::default();
        tray.place(SlotId::Rice, &food("rice-1", FoodCategory::Rice));
        let before = tray.clone();

        assert_eq!(
            tray.place(SlotId::Side2, &food("rice-1", FoodCategory::Rice)),
            Placement::WrongCategory
        );
        assert_eq!(tray, before);
    }

    #[test]
    fn test_relocation_moves_food_and_leaves_others() {
        let mut tray = Tray::default();
        tray.place(SlotId::Rice, &food("rice-1", FoodCategory::Rice));
        tray.place(SlotId::Side1, &food("veg-1", FoodCategory::Vegetable));
        tray.place(SlotId::Side2, &food("meat-1", FoodCategory::Meat));

        let outcome = tray.place(SlotId::Side4, &food("veg-1", FoodCategory::Vegetable));

        assert_eq!(outcome, Placement::Placed { vacated: Some(SlotId::Side1) });
        assert!(tray.side1.is_none());
        assert_eq!(tray.side4.as_ref().map(|f| f.id.as_str()), Some("veg-1"));
        assert_eq!(tray.rice.as_ref().map(|f| f.id.as_str()), Some("rice-1"));
        assert_eq!(tray.side2.as_ref().map(|f| f.id.as_str()), Some("meat-1"));
        assert!(tray.soup.is_none());
        assert!(tray.side3.is_none());
    }

    #[test]
    fn test_dropping_food_on_its_own_slot_is_a_no_op() {
        let mut tray = Tray::default();
        tray.place(SlotId::Side3, &food("fruit-1", FoodCategory::Fruit));
        let before = tray.clone();

        assert_eq!(
            tray.place(SlotId::Side3, &food("fruit-1", FoodCategory::Fruit)),
            Placement::SlotOccupied
        );
        assert_eq!(tray, before);
    }

    #[test]
    fn test_single_occupancy_over_drop_sequence() {
        let veg = food("veg-2", FoodCategory::Vegetable);
        let fruit = food("fruit-2", FoodCategory::Fruit);
        let mut tray = Tray::default();
        let drops = [
            (SlotId::Side1, &veg),
            (SlotId::Side2, &veg),
            (SlotId::Side1, &fruit),
            (SlotId::Side3, &veg),
            (SlotId::Side4, &fruit),
            (SlotId::Side2, &fruit),
            (SlotId::Side1, &veg),
        ];
        for (slot, f) in drops {
            tray.place(slot, f);
            assert_single_occupancy(&tray);
        }
        assert_eq!(tray.slot_of("veg-2"), Some(SlotId::Side1));
        assert_eq!(tray.slot_of("fruit-2"), Some(SlotId::Side2));
    }

    #[test]
    fn test_remove_empty_slot_is_fine() {
        let mut tray = Tray::default();
        assert_eq!(tray.remove(SlotId::Soup), None);
        assert!(tray.is_empty());
    }

    #[test]
    fn test_remove_food_clears_all_stickers_on_slot() {
        let mut tray = Tray::default();
        let mut overlay = DecorationOverlay::default();
        tray.place(SlotId::Soup, &food("soup-1", FoodCategory::Soup));
        tray.place(SlotId::Rice, &food("rice-1", FoodCategory::Rice));
        for glyph in ["✨", "💖", "🌟", "😊"] {
            overlay.add_mark(SlotId::Soup, sticker(glyph), &tray);
        }
        overlay.add_mark(SlotId::Rice, sticker("✨"), &tray);

        let removed = remove_food(&mut tray, &mut overlay, SlotId::Soup);

        assert_eq!(removed.map(|f| f.id), Some("soup-1".to_string()));
        assert!(overlay.marks(SlotId::Soup).is_empty());
        assert_eq!(overlay.marks(SlotId::Rice).len(), 1);
    }

    #[test]
    fn test_relocation_clears_stickers_on_vacated_slot() {
        let mut tray = Tray::default();
        let mut overlay = DecorationOverlay::default();
        let meat = food("meat-2", FoodCategory::Meat);
        place_food(&mut tray, &mut overlay, SlotId::Side1, &meat);
        overlay.add_mark(SlotId::Side1, sticker("🌟"), &tray);

        let outcome = place_food(&mut tray, &mut overlay, SlotId::Side3, &meat);

        assert_eq!(outcome, Placement::Placed { vacated: Some(SlotId::Side1) });
        assert!(overlay.marks(SlotId::Side1).is_empty());
        assert!(overlay.marks(SlotId::Side3).is_empty());
    }

    #[test]
    fn test_rejected_place_food_keeps_overlay() {
        let mut tray = Tray::default();
        let mut overlay = DecorationOverlay::default();
        place_food(&mut tray, &mut overlay, SlotId::Side1, &food("veg-1", FoodCategory::Vegetable));
        overlay.add_mark(SlotId::Side1, sticker("✨"), &tray);
        let before = overlay.clone();

        let outcome = place_food(
            &mut tray,
            &mut overlay,
            SlotId::Side1,
            &food("fruit-1", FoodCategory::Fruit),
        );

        assert!(!outcome.landed());
        assert_eq!(overlay, before);
    }
}
