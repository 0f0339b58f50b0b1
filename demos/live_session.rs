//! Example: Keystroke-Driven Filtering Session
//!
//! Replays the keystrokes of a user typing into a search box, showing when
//! the minimum-length policy lets a query through, how tag selection
//! narrows further, and what each completed pass reports.
//!
//! Run with:
//! ```bash
//! cargo run --example live_session
//! ```

use recette::catalog::{Catalog, Ingredient, Recipe};
use recette::search::{filter_candidates, SearchEngine, Tag};

fn record(id: u32, name: &str, appliance: &str, ingredients: &[&str], description: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        servings: 4,
        ingredients: ingredients.iter().copied().map(Ingredient::named).collect(),
        time: 30,
        description: description.to_string(),
        appliance: appliance.to_string(),
        utensils: vec!["couteau".to_string(), "saladier".to_string()],
    }
}

fn main() -> Result<(), recette::RecetteError> {
    let catalog = Catalog::from_records(vec![
        record(
            1,
            "Salade de concombre",
            "Aucun",
            &["Concombre", "Crème fraîche", "Ciboulette"],
            "Éplucher le concombre, le couper en rondelles et mélanger avec la crème.",
        ),
        record(
            2,
            "Concombre au thon",
            "Mixeur",
            &["Concombre", "Thon", "Fromage frais"],
            "Mixer le thon avec le fromage frais et garnir les barquettes de concombre.",
        ),
        record(
            3,
            "Compote de pommes",
            "Casserole",
            &["Pommes", "Sucre", "Cannelle"],
            "Couper les pommes et les faire compoter avec le sucre et la cannelle.",
        ),
    ]);

    let mut engine = SearchEngine::new(catalog);
    engine.subscribe(|update: &recette::search::FilterUpdate| {
        println!(
            "    -> pass completed: {} result(s), {} ingredient value(s) available",
            update.result_count,
            update.available_tags.ingredients.len()
        );
    });

    // The user types "conco" one character at a time
    for typed in ["c", "co", "con", "conc", "conco"] {
        println!("typing {typed:?}");
        match engine.apply_text_query(typed)? {
            Some(_) => {}
            None => println!("    -> below the minimum length, nothing happens"),
        }
    }

    // Narrow the tag picker the way a dropdown search box would
    let offered = engine.available_tags().ingredients.clone();
    let picks = filter_candidates("cr", &offered)?;
    println!("picker narrowed by \"cr\": {picks:?}");

    println!("selecting ingredient tag 'crème fraîche'");
    engine.select_tag(&Tag::ingredient("crème fraîche"))?;

    for card in engine.visible() {
        println!("    visible: {}", card.recipe.name);
    }

    println!("erasing the query back to \"co\"");
    engine.apply_text_query("co")?;

    for card in engine.visible() {
        println!("    visible: {}", card.recipe.name);
    }

    Ok(())
}
