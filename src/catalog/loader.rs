use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::catalog::{CatalogError, Category, CategoryMapping};
use crate::input::open_maybe_gz;

pub fn load_catalog(path: &Path) -> Result<CategoryMapping, CatalogError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mapping = load_catalog_str(&text)?;
    tracing::info!(
        path = %path.display(),
        categories = mapping.categories.len(),
        "loaded category catalog"
    );
    Ok(mapping)
}

pub fn load_catalog_str(text: &str) -> Result<CategoryMapping, CatalogError> {
    let value: Value = serde_json::from_str(text)?;
    load_catalog_value(&value)
}

/// Validates a parsed `{name: [label, ...]}` object. Key order is kept.
pub fn load_catalog_value(value: &Value) -> Result<CategoryMapping, CatalogError> {
    let object = value.as_object().ok_or_else(|| {
        CatalogError::InvalidFormat(format!(
            "expected an object of category -> labels, found {}",
            json_kind(value)
        ))
    })?;

    let mut categories = Vec::with_capacity(object.len());
    for (name, labels) in object {
        if name.trim().is_empty() {
            return Err(CatalogError::InvalidFormat(
                "category name must not be empty".to_string(),
            ));
        }
        let items = labels.as_array().ok_or_else(|| {
            CatalogError::InvalidFormat(format!(
                "category '{}' must map to a list of strings, found {}",
                name,
                json_kind(labels)
            ))
        })?;
        let mut out = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(label) => out.push(label.to_string()),
                None => {
                    return Err(CatalogError::InvalidFormat(format!(
                        "category '{}' label #{} is {}, expected a string",
                        name,
                        idx,
                        json_kind(item)
                    )));
                }
            }
        }
        if out.is_empty() {
            tracing::warn!(category = %name, "category has no labels and can never score");
        }
        categories.push(Category::new(name.clone(), out));
    }

    Ok(CategoryMapping { categories })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
