use crate::shared::*;

/// Populate the StickerCatalog. Glyphs are drawn as-is by the front end.
pub fn populate_stickers(catalog: &mut StickerCatalog) {
    catalog.stickers = [
        ("deco-1", "Sparkles", "✨"),
        ("deco-2", "Heart", "💖"),
        ("deco-3", "Star", "🌟"),
        ("deco-4", "Smile", "😊"),
    ]
    .into_iter()
    .map(|(id, name, glyph)| StickerDef {
        id: id.into(),
        name: name.into(),
        glyph: glyph.into(),
    })
    .collect();
}
