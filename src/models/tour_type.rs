use serde::{Deserialize, Serialize};

use super::tour::TourCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourTypeItem {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub label_ru: String,
    #[serde(default)]
    pub label_uz: String,
    #[serde(default)]
    pub label_en: String,
}

impl TourTypeItem {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Missing code".to_string());
        }
        Ok(())
    }
}

/// Seeded into an empty registry the first time it is listed.
pub fn default_tour_types() -> Vec<TourTypeItem> {
    vec![
        TourTypeItem {
            code: TourCategory::REGULAR.to_string(),
            label_ru: "Обычный тур".to_string(),
            label_uz: "Oddiy tur".to_string(),
            label_en: "Regular".to_string(),
        },
        TourTypeItem {
            code: TourCategory::HOT.to_string(),
            label_ru: "Горящий тур".to_string(),
            label_uz: "Qaynoq tur".to_string(),
            label_en: "Hot tour".to_string(),
        },
        TourTypeItem {
            code: TourCategory::PROMO.to_string(),
            label_ru: "Акция".to_string(),
            label_uz: "Aksiya".to_string(),
            label_en: "Promo".to_string(),
        },
    ]
}
