//! Data layer: populates the food and sticker catalogs at startup.
//!
//! This plugin runs once in `Startup`, fills `FoodCatalog` and
//! `StickerCatalog` from the hard-coded game-design tables defined in
//! submodules. Nothing mutates either catalog afterwards.

mod foods;
mod stickers;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_all_data);
    }
}

fn load_all_data(
    mut food_catalog: ResMut<FoodCatalog>,
    mut sticker_catalog: ResMut<StickerCatalog>,
) {
    info!("DataPlugin: populating catalogs…");

    foods::populate_foods(&mut food_catalog);
    info!("  Foods loaded: {}", food_catalog.foods.len());

    stickers::populate_stickers(&mut sticker_catalog);
    info!("  Stickers loaded: {}", sticker_catalog.stickers.len());
}
