//! Plain-text view of a `SessionSnapshot`.

use std::fmt::Write;

use crate::session::SessionSnapshot;
use crate::shared::*;
use crate::wizard::confirm_label;

fn mood_face(mood: MascotMood) -> &'static str {
    match mood {
        MascotMood::Happy => "(^o^)",
        MascotMood::Normal => "(o.o)",
        MascotMood::Thinking => "(-_-)",
    }
}

pub fn render_view(snapshot: &SessionSnapshot, mascot: &str, show_catalog: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "── {:?} ──", snapshot.stage);
    let _ = writeln!(
        out,
        "{} {}: \"{}\"",
        mood_face(snapshot.narration.mood),
        mascot,
        snapshot.narration.line
    );
    out.push_str(&render_tray(&snapshot.tray, &snapshot.decorations));

    if let Some(verdict) = &snapshot.verdict {
        if snapshot.stage == WizardStage::Result {
            let outcome = if verdict.is_balanced { "balanced" } else { "unbalanced" };
            let _ = writeln!(out, "meal: {outcome}");
        }
    }

    if show_catalog {
        if !snapshot.offered_foods.is_empty() {
            let _ = writeln!(out, "on offer:");
            for food in &snapshot.offered_foods {
                let _ = writeln!(out, "  {:<8} {} ({})", food.id, food.name, food.category.label());
            }
        }
        if !snapshot.offered_stickers.is_empty() {
            let _ = writeln!(out, "stickers:");
            for sticker in &snapshot.offered_stickers {
                let _ = writeln!(out, "  {:<8} {} {}", sticker.id, sticker.glyph, sticker.name);
            }
        }
    }

    let mut actions = Vec::new();
    if snapshot.can_confirm {
        if let Some(label) = confirm_label(snapshot.stage) {
            actions.push(format!("next = \"{label}\""));
        }
    } else if let Some(label) = confirm_label(snapshot.stage) {
        actions.push(format!("next (locked) = \"{label}\""));
    }
    if snapshot.can_redo_sides {
        actions.push("redo".to_string());
    }
    if snapshot.stage == WizardStage::Result {
        actions.push("restart".to_string());
    }
    if !actions.is_empty() {
        let _ = writeln!(out, "actions: {}", actions.join(" | "));
    }
    out
}

pub fn render_tray(tray: &Tray, overlay: &DecorationOverlay) -> String {
    let mut out = String::new();
    for slot in SlotId::ALL {
        let contents = tray.get(slot).map_or("·", |f| f.name.as_str());
        let glyphs: String = overlay.marks(slot).iter().map(|m| m.glyph.as_str()).collect();
        if glyphs.is_empty() {
            let _ = writeln!(out, "  [{:<5}] {}", slot.as_str(), contents);
        } else {
            let _ = writeln!(out, "  [{:<5}] {} {}", slot.as_str(), contents, glyphs);
        }
    }
    out
}

pub fn render_catalog(foods: &FoodCatalog, stickers: &StickerCatalog) -> String {
    let mut out = String::new();
    for food in &foods.foods {
        let _ = writeln!(out, "  {:<8} {} ({})", food.id, food.name, food.category.label());
    }
    for sticker in &stickers.stickers {
        let _ = writeln!(out, "  {:<8} {} {}", sticker.id, sticker.glyph, sticker.name);
    }
    out
}
