//! Part catalog: the ordered set of tracked maintenance categories and the
//! keyword sets used to classify free-text service descriptions.
//!
//! The catalog is configuration, not logic: the engine consumes it as-is
//! and a deployment may replace it wholesale (the CLI accepts a JSON file).
//! The built-in catalog mirrors the production fleet configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// Canonical names of the built-in categories.
///
/// The status evaluator's Mercedes Sprinter override is keyed on
/// [`TIMING_BELT`] and [`WATER_PUMP`], so custom catalogs that want the
/// override must reuse these names.
pub mod names {
    pub const OIL_SERVICE: &str = "ТО (масло+фільтри)";
    pub const TIMING_BELT: &str = "ГРМ (ролики+ремінь)";
    pub const SERPENTINE_BELT: &str = "Обвідний ремінь+ролики";
    pub const WATER_PUMP: &str = "Помпа";
    pub const CLUTCH: &str = "Зчеплення";
    pub const STARTER: &str = "Стартер";
    pub const ALTERNATOR: &str = "Генератор";
    pub const SUSPENSION_DIAGNOSTIC: &str = "Діагностика ходової";
    pub const WHEEL_ALIGNMENT: &str = "Розвал-сходження";
    pub const CALIPER_SERVICE: &str = "Профілактика супортів";
    pub const COMPUTER_DIAGNOSTIC: &str = "Комп'ютерна діагностика";
    pub const SOOT_BURNOFF: &str = "Прожиг сажового";
    pub const BRAKE_PADS: &str = "Гальмівні колодки";
    pub const BRAKE_DISCS: &str = "Гальмівні диски";
    pub const SHOCK_ABSORBERS: &str = "Амортизатори";
    pub const SHOCK_MOUNTS: &str = "Опора амортизаторів";
    pub const BALL_JOINT: &str = "Шарова опора";
    pub const STEERING_ROD: &str = "Рульова тяга";
    pub const TIE_ROD_END: &str = "Рульовий накінечник";
    pub const BATTERY: &str = "Акумулятор";
}

/// One tracked maintenance category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartCategory {
    pub name: String,
    /// Case-insensitive substrings; a description matching any of them
    /// belongs to this category. An empty set never matches.
    pub keywords: Vec<String>,
}

impl PartCategory {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
        }
    }
}

/// The fixed, ordered list of part categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartCatalog {
    pub categories: Vec<PartCategory>,
}

impl PartCatalog {
    /// The production catalog: 20 categories in display order.
    pub fn builtin() -> Self {
        use self::names as n;
        Self {
            categories: vec![
                PartCategory::new(n::OIL_SERVICE, &["масло", "олив", "фільтр"]),
                PartCategory::new(n::TIMING_BELT, &["грм"]),
                PartCategory::new(n::SERPENTINE_BELT, &["обвідн"]),
                PartCategory::new(n::WATER_PUMP, &["помпа", "помпи", "помпу"]),
                PartCategory::new(n::SUSPENSION_DIAGNOSTIC, &["діагностика ходової", "ходов"]),
                PartCategory::new(n::WHEEL_ALIGNMENT, &["розвал", "сходження"]),
                PartCategory::new(n::CALIPER_SERVICE, &["супорт"]),
                PartCategory::new(n::COMPUTER_DIAGNOSTIC, &["комп'ютерна діагностика"]),
                PartCategory::new(n::SOOT_BURNOFF, &["сажов", "прожиг"]),
                PartCategory::new(n::BRAKE_PADS, &["колодк"]),
                PartCategory::new(n::BRAKE_DISCS, &["гальмівні диски", "гальмівний диск"]),
                PartCategory::new(n::SHOCK_ABSORBERS, &["амортизатор"]),
                PartCategory::new(n::SHOCK_MOUNTS, &["опора амортизатор", "опори амортизатор"]),
                PartCategory::new(n::BALL_JOINT, &["шаров"]),
                PartCategory::new(n::STEERING_ROD, &["рульова тяга", "рульові тяги"]),
                PartCategory::new(n::TIE_ROD_END, &["накінечник"]),
                PartCategory::new(n::CLUTCH, &["зчеплення"]),
                PartCategory::new(n::STARTER, &["стартер"]),
                PartCategory::new(n::ALTERNATOR, &["генератор"]),
                PartCategory::new(n::BATTERY, &["акумулятор", "акб"]),
            ],
        }
    }

    /// Load a replacement catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a catalog from JSON. A catalog with no categories is rejected;
    /// deriving against it would track nothing and hide the mistake.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|error| FleetError::Catalog(error.to_string()))?;
        if catalog.is_empty() {
            return Err(FleetError::Catalog("no part categories defined".to_string()));
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&PartCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Category names in catalog (display) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|category| category.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let catalog = PartCatalog::builtin();
        let mut names: Vec<_> = catalog.names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn builtin_keywords_are_nonempty() {
        for category in &PartCatalog::builtin().categories {
            assert!(!category.keywords.is_empty(), "{}", category.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let catalog = PartCatalog::builtin();
        assert!(catalog.get(names::TIMING_BELT).is_some());
        assert!(catalog.get("немає такої").is_none());
    }

    #[test]
    fn json_catalog_roundtrips() {
        let json = r#"{"categories":[{"name":"Турбіна","keywords":["турбін"]}]}"#;
        let catalog = PartCatalog::from_json_str(json).expect("parse catalog");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Турбіна").is_some());
    }

    #[test]
    fn empty_and_malformed_catalogs_are_rejected() {
        assert!(matches!(
            PartCatalog::from_json_str(r#"{"categories":[]}"#),
            Err(FleetError::Catalog(_))
        ));
        assert!(matches!(
            PartCatalog::from_json_str("{not json"),
            Err(FleetError::Catalog(_))
        ));
    }
}
