use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::FoodEntry;

/// Load a catalog from a JSON document.
///
/// Deduplicates foods by exact name, keeping the last occurrence.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let mut catalog: Catalog = serde_json::from_str(&content)?;
    catalog.foods = dedupe_foods(catalog.foods);
    Ok(catalog)
}

/// Deduplicate by exact name, last occurrence wins, order preserved.
fn dedupe_foods(foods: Vec<FoodEntry>) -> Vec<FoodEntry> {
    let mut deduped: Vec<FoodEntry> = Vec::with_capacity(foods.len());
    for food in foods {
        if let Some(existing) = deduped.iter_mut().find(|f| f.name == food.name) {
            *existing = food;
        } else {
            deduped.push(food);
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog() {
        let json = r#"{
            "foods": [{"name": "rice", "caloriesPerUnit": 130, "unit": "g"}],
            "basalCalories": {"weightGainFactor": 1.2, "weightLossFactor": 0.8},
            "exerciseCalories": {"pushUp": 0.5}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.foods[0].name, "rice");
        assert!((catalog.basal_calories.weight_gain_factor - 1.2).abs() < 1e-9);
        assert!((catalog.exercise_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_deduplication_last_wins() {
        let json = r#"{
            "foods": [
                {"name": "rice", "caloriesPerUnit": 130, "unit": "g"},
                {"name": "bread", "caloriesPerUnit": 265, "unit": "g"},
                {"name": "rice", "caloriesPerUnit": 360, "unit": "g"}
            ],
            "basalCalories": {"weightGainFactor": 1.2, "weightLossFactor": 0.8},
            "exerciseCalories": {"pushUp": 0.5}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let rice = catalog.find_entry("rice").unwrap();
        assert!((rice.calories_per_hundred_units - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_names_differing_in_case_both_kept() {
        let json = r#"{
            "foods": [
                {"name": "Rice", "caloriesPerUnit": 130, "unit": "g"},
                {"name": "rice", "caloriesPerUnit": 360, "unit": "g"}
            ],
            "basalCalories": {"weightGainFactor": 1.2, "weightLossFactor": 0.8},
            "exerciseCalories": {"pushUp": 0.5}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"foods\": [").unwrap();

        assert!(load_catalog(file.path()).is_err());
    }
}
