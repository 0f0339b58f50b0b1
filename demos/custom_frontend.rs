//! Example: Custom Frontend Over the Filter Engine
//!
//! This example demonstrates how to build a frontend for recette by
//! subscribing a `FilterObserver` and re-rendering from the engine's cards
//! after every pass, the way a GUI would show and hide recipe cards.
//!
//! Run with:
//! ```bash
//! cargo run --example custom_frontend
//! ```

use recette::catalog::{CardId, Catalog, Visibility};
use recette::search::{FilterObserver, FilterUpdate, SearchEngine, Tag};
use std::collections::HashMap;

/// Minimal card renderer
///
/// Builds one "card" per record up front, then only toggles which cards are
/// drawn. Real frontends keep DOM nodes or widgets where this one keeps
/// strings.
struct CardWall {
    cards: HashMap<CardId, String>,
}

impl CardWall {
    fn new(engine: &SearchEngine) -> Self {
        let cards = engine
            .cards()
            .iter()
            .map(|card| {
                let line = format!("[{}] {} ({} min)", card.recipe.id, card.recipe.name, card.recipe.time);
                (card.id, line)
            })
            .collect();
        Self { cards }
    }

    fn render(&self, engine: &SearchEngine) {
        for card in engine.cards() {
            match card.visibility {
                Visibility::Shown => {
                    if let Some(line) = self.cards.get(&card.id) {
                        println!("  {line}");
                    }
                }
                Visibility::Hidden => {}
            }
        }
    }
}

/// Observer that mirrors a result counter and tag picker widgets
struct StatusBar;

impl FilterObserver for StatusBar {
    fn on_filter(&mut self, update: &FilterUpdate) {
        println!(
            "-- {} recipe(s), {} tag value(s) still selectable",
            update.result_count,
            update.available_tags.len()
        );
    }
}

const CATALOG_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Limonade de coco",
    "servings": 1,
    "ingredients": [
      { "ingredient": "Lait de coco", "quantity": 400, "unit": "ml" },
      { "ingredient": "Jus de citron", "quantity": 2 },
      { "ingredient": "Sucre", "quantity": 30, "unit": "grammes" }
    ],
    "time": 10,
    "description": "Mettre le lait de coco, le jus de citron et le sucre dans le blender. Mixer le tout.",
    "appliance": "Blender",
    "utensils": ["cuillère à soupe", "verres"]
  },
  {
    "id": 2,
    "name": "Tarte au citron",
    "servings": 6,
    "ingredients": [
      { "ingredient": "Pâte sablée", "quantity": 230, "unit": "grammes" },
      { "ingredient": "Citron", "quantity": 4 },
      { "ingredient": "Beurre", "quantity": 100, "unit": "grammes" }
    ],
    "time": 45,
    "description": "Étaler la pâte dans le moule. Mélanger le jus des citrons avec le beurre fondu et enfourner.",
    "appliance": "Four",
    "utensils": ["moule à tarte", "fouet"]
  },
  {
    "id": 3,
    "name": "Gratin dauphinois",
    "servings": 6,
    "ingredients": [
      { "ingredient": "Pommes de terre", "quantity": 1, "unit": "kg" },
      { "ingredient": "Crème fraîche", "quantity": 0.5, "unit": "litres" }
    ],
    "time": 90,
    "description": "Couper les pommes de terre en tranches, recouvrir de crème et enfourner longuement.",
    "appliance": "Four",
    "utensils": ["mandoline", "plat à gratin"]
  }
]"#;

fn main() -> Result<(), recette::RecetteError> {
    let catalog = Catalog::from_json(CATALOG_JSON)?;
    let mut engine = SearchEngine::new(catalog);
    let wall = CardWall::new(&engine);

    engine.subscribe(StatusBar);

    println!("All recipes:");
    wall.render(&engine);

    println!("\nQuery 'citron':");
    engine.apply_text_query("citron")?;
    wall.render(&engine);

    println!("\nSelect appliance tag 'four':");
    engine.select_tag(&Tag::appliance("four"))?;
    wall.render(&engine);

    println!("\nClear the query (rolls back to the tag subset):");
    engine.apply_text_query("")?;
    wall.render(&engine);

    Ok(())
}
