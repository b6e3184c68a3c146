//! The four foods. Berries are the only hand-gatherable one; the rest
//! come out of food producer automations.

use pandactory_core::catalog::{CatalogBuilder, FoodDef};
use pandactory_core::id::FoodId;

fn def(id: &str, name: &str, nutrition: f64, primary: bool) -> FoodDef {
    FoodDef {
        id: FoodId::new(id),
        name: name.to_string(),
        nutrition,
        primary,
    }
}

pub(crate) fn register(b: &mut CatalogBuilder) {
    b.food(def("berries", "Berries", 3.0, true))
        .food(def("cactus_juice", "Cactus Juice", 8.0, false))
        .food(def("smoked_fish", "Smoked Fish", 15.0, false))
        .food(def("greenhouse_veggies", "Greenhouse Veggies", 18.0, false));
}
