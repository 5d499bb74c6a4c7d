use crate::catalog::{Category, CategoryMapping};

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

const TECHNOLOGY: &[&str] = &["computer", "phone", "laptop", "tablet", "screen", "keyboard"];
const OUTDOOR: &[&str] = &["tree", "mountain", "sky", "grass", "beach", "landscape"];
const INDOOR: &[&str] = &["chair", "table", "bed", "couch", "room", "kitchen"];
const ANIMAL: &[&str] = &["dog", "cat", "bird", "horse", "pet", "wildlife"];
const VEHICLE: &[&str] = &["car", "truck", "bicycle", "motorcycle", "bus", "boat"];
const PEOPLE: &[&str] = &["person", "man", "woman", "child", "face", "group"];
const FOOD: &[&str] = &["food", "dish", "fruit", "vegetable", "drink", "dessert"];

const BUILTIN_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "technology",
        labels: TECHNOLOGY,
    },
    CategoryDef {
        name: "outdoor",
        labels: OUTDOOR,
    },
    CategoryDef {
        name: "indoor",
        labels: INDOOR,
    },
    CategoryDef {
        name: "animal",
        labels: ANIMAL,
    },
    CategoryDef {
        name: "vehicle",
        labels: VEHICLE,
    },
    CategoryDef {
        name: "people",
        labels: PEOPLE,
    },
    CategoryDef {
        name: "food",
        labels: FOOD,
    },
];

pub fn builtin_defs() -> &'static [CategoryDef] {
    BUILTIN_CATEGORIES
}

pub fn builtin_catalog() -> CategoryMapping {
    let categories = builtin_defs()
        .iter()
        .map(|def| {
            Category::new(
                def.name,
                def.labels.iter().map(|l| l.to_string()).collect(),
            )
        })
        .collect();
    CategoryMapping { categories }
}
