//! Testing utilities for recette
//!
//! This module provides a small French recipe fixture shared by unit tests,
//! plus an observer that records every update it receives.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::catalog::{Catalog, Ingredient, Recipe};
use crate::search::{FilterObserver, FilterUpdate};

/// Builds one fixture record
#[must_use]
pub fn recipe(
    id: u32,
    name: &str,
    appliance: &str,
    ingredients: &[&str],
    utensils: &[&str],
    description: &str,
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        servings: 4,
        ingredients: ingredients.iter().copied().map(Ingredient::named).collect(),
        time: 30,
        description: description.to_string(),
        appliance: appliance.to_string(),
        utensils: utensils.iter().map(ToString::to_string).collect(),
    }
}

/// Five-record fixture with known overlaps between names, descriptions,
/// ingredients and appliances
///
/// The two oven recipes share the appliance "Four", the two soups share the
/// name word "Soupe", "beurre" appears as an ingredient of exactly two
/// records and "mixeur" appears in exactly one description.
#[must_use]
pub fn sample_records() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Tarte aux pommes",
            "Four",
            &["Pommes", "Pâte brisée", "Sucre", "Beurre"],
            &["moule à tarte", "couteau"],
            "Étaler la pâte, disposer les pommes et cuire au four.",
        ),
        recipe(
            2,
            "Soupe de tomates",
            "Mixeur",
            &["Tomates", "Oignon", "Crème fraîche"],
            &["casserole", "louche"],
            "Faire revenir les tomates et l'oignon puis passer la soupe au \
             mixeur plongeant. Ajouter un nuage de crème fraîche avant de servir.",
        ),
        recipe(
            3,
            "Soupe de poireaux",
            "Casserole",
            &["Poireaux", "Pommes de terre", "Oignon"],
            &["casserole", "moulin à légumes"],
            "Faire cuire les poireaux et les pommes de terre dans un grand \
             volume d'eau. Passer au moulin et servir bien chaud.",
        ),
        recipe(
            4,
            "Omelette aux herbes",
            "Poêle",
            &["Oeufs", "Beurre", "Ciboulette"],
            &["poêle", "fouet"],
            "Battre les oeufs avec la ciboulette et cuire dans une poêle \
             avec une noix de beurre.",
        ),
        recipe(
            5,
            "Gratin de courgettes",
            "Four",
            &["Courgettes", "Fromage râpé", "Lait"],
            &["plat à gratin", "râpe"],
            "Couper les courgettes en rondelles, recouvrir de fromage et \
             enfourner jusqu'à obtenir un gratin doré.",
        ),
    ]
}

/// Catalog over [`sample_records`]
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_records(sample_records())
}

/// Observer that appends every received update to a shared list
///
/// Keep the [`Rc`] handle returned by [`RecordingObserver::new`] to inspect
/// the updates after the engine has consumed the observer.
pub struct RecordingObserver {
    updates: Rc<RefCell<Vec<FilterUpdate>>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> (Self, Rc<RefCell<Vec<FilterUpdate>>>) {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let observer = Self {
            updates: Rc::clone(&updates),
        };
        (observer, updates)
    }
}

impl FilterObserver for RecordingObserver {
    fn on_filter(&mut self, update: &FilterUpdate) {
        self.updates.borrow_mut().push(update.clone());
    }
}
