//! Decoration domain: stickers on filled tray slots.
//!
//! Marks are purely cosmetic: they never affect placement or balance, and
//! they never outlive the food they sit on (see `crate::tray::remove_food`).

use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct DecorationPlugin;

impl Plugin for DecorationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_sticker_drops.in_set(SessionSet::Decorate));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay operations
// ─────────────────────────────────────────────────────────────────────────────

impl DecorationOverlay {
    /// Append a mark to `slot`. Returns false (and changes nothing) when the
    /// slot holds no food.
    pub fn add_mark(&mut self, slot: SlotId, mark: DecorationMark, tray: &Tray) -> bool {
        if !tray.is_occupied(slot) {
            return false;
        }
        self.marks.entry(slot).or_default().push(mark);
        true
    }

    pub fn clear_slot(&mut self, slot: SlotId) {
        self.marks.remove(&slot);
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Marks on `slot` in paint order; empty when the slot has none.
    pub fn marks(&self, slot: SlotId) -> &[DecorationMark] {
        self.marks.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_marks(&self) -> usize {
        self.marks.values().map(Vec::len).sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Reads `StickerDropEvent` and lays the sticker on the slot, if the stage
/// hands out stickers and the slot has food on it.
pub fn handle_sticker_drops(
    mut events: EventReader<StickerDropEvent>,
    stage: Res<State<WizardStage>>,
    stickers: Res<StickerCatalog>,
    tray: Res<Tray>,
    mut overlay: ResMut<DecorationOverlay>,
) {
    for ev in events.read() {
        if !stage.get().offers_stickers() {
            debug!("[Decoration] Sticker drop ignored during {:?}", stage.get());
            continue;
        }
        let Some(sticker) = stickers.get(&ev.sticker_id) else {
            warn!("[Decoration] Unknown sticker id '{}'", ev.sticker_id);
            continue;
        };
        let mark = DecorationMark {
            offset_x: ev.offset_x,
            offset_y: ev.offset_y,
            glyph: sticker.glyph.clone(),
        };
        if overlay.add_mark(ev.slot, mark, &tray) {
            debug!(
                "[Decoration] {} on {} at ({}, {})",
                sticker.name, ev.slot, ev.offset_x, ev.offset_y
            );
        } else {
            debug!("[Decoration] {} is empty, sticker dropped", ev.slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tray_with_rice() -> Tray {
        Tray {
            rice: Some(FoodItem {
                id: "rice-1".to_string(),
                name: "White rice".to_string(),
                category: FoodCategory::Rice,
                image_ref: String::new(),
            }),
            ..default()
        }
    }

    fn mark(glyph: &str, x: f32) -> DecorationMark {
        DecorationMark {
            offset_x: x,
            offset_y: 0.0,
            glyph: glyph.to_string(),
        }
    }

    #[test]
    fn test_add_mark_on_empty_slot_is_rejected() {
        let tray = tray_with_rice();
        let mut overlay = DecorationOverlay::default();
        assert!(!overlay.add_mark(SlotId::Soup, mark("✨", 1.0), &tray));
        assert_eq!(overlay, DecorationOverlay::default());
    }

    #[test]
    fn test_marks_append_in_paint_order() {
        let tray = tray_with_rice();
        let mut overlay = DecorationOverlay::default();
        assert!(overlay.add_mark(SlotId::Rice, mark("✨", 1.0), &tray));
        assert!(overlay.add_mark(SlotId::Rice, mark("💖", 2.0), &tray));
        assert!(overlay.add_mark(SlotId::Rice, mark("✨", 3.0), &tray));

        let glyphs: Vec<&str> = overlay
            .marks(SlotId::Rice)
            .iter()
            .map(|m| m.glyph.as_str())
            .collect();
        assert_eq!(glyphs, vec!["✨", "💖", "✨"]);
        assert_eq!(overlay.total_marks(), 3);
    }

    #[test]
    fn test_out_of_bounds_offsets_are_accepted() {
        let tray = tray_with_rice();
        let mut overlay = DecorationOverlay::default();
        assert!(overlay.add_mark(
            SlotId::Rice,
            DecorationMark {
                offset_x: -5000.0,
                offset_y: 99999.0,
                glyph: "🌟".to_string(),
            },
            &tray
        ));
        assert_eq!(overlay.marks(SlotId::Rice)[0].offset_y, 99999.0);
    }

    #[test]
    fn test_clear_slot_leaves_other_slots() {
        let mut tray = tray_with_rice();
        tray.soup = Some(FoodItem {
            id: "soup-1".to_string(),
            name: "Seaweed soup".to_string(),
            category: FoodCategory::Soup,
            image_ref: String::new(),
        });
        let mut overlay = DecorationOverlay::default();
        overlay.add_mark(SlotId::Rice, mark("✨", 1.0), &tray);
        overlay.add_mark(SlotId::Soup, mark("💖", 1.0), &tray);

        overlay.clear_slot(SlotId::Rice);
        assert!(overlay.marks(SlotId::Rice).is_empty());
        assert_eq!(overlay.marks(SlotId::Soup).len(), 1);
    }
}
