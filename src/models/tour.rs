use serde::{Deserialize, Serialize, Serializer};

use super::{lang::Lang, nullable};
use crate::{
    editor::{
        range::{format_date, parse_date, DateRange},
        slug::slugify,
    },
    utils::urls::absolutize_upload,
};

/// A text field published in several languages, plus the untagged value older
/// records (and older site code) still read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub legacy: Option<String>,
    pub ru: Option<String>,
    pub uz: Option<String>,
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn from_legacy(value: impl Into<String>) -> Self {
        Self {
            legacy: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, lang: Lang) -> Option<&str> {
        match lang {
            Lang::Ru => self.ru.as_deref(),
            Lang::Uz => self.uz.as_deref(),
            Lang::En => self.en.as_deref(),
        }
    }

    pub fn set(&mut self, lang: Lang, value: impl Into<String>) {
        let slot = match lang {
            Lang::Ru => &mut self.ru,
            Lang::Uz => &mut self.uz,
            Lang::En => &mut self.en,
        };
        *slot = Some(value.into());
    }

    /// Value shown for `lang`: its own text, else the legacy text, else "".
    pub fn resolve(&self, lang: Lang) -> &str {
        non_empty(self.get(lang))
            .or_else(|| non_empty(self.legacy.as_deref()))
            .unwrap_or("")
    }

    /// Value for the untagged field at save time: ru, legacy, uz, en.
    pub fn generic(&self) -> &str {
        [
            self.ru.as_deref(),
            self.legacy.as_deref(),
            self.uz.as_deref(),
            self.en.as_deref(),
        ]
        .into_iter()
        .find_map(non_empty)
        .unwrap_or("")
    }

    /// Writes the resolved value into every language slot.
    pub fn fill_from_fallbacks(&mut self) {
        for lang in Lang::ALL {
            let value = self.resolve(lang).to_string();
            self.set(lang, value);
        }
    }

    pub fn sync_legacy_with(&mut self, lang: Lang) {
        self.legacy = Some(self.resolve(lang).to_string());
    }

    pub fn is_blank(&self) -> bool {
        self.generic().is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Open set of tour type codes; `hot` is the only one with extra meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TourCategory(String);

impl TourCategory {
    pub const REGULAR: &'static str = "regular";
    pub const HOT: &'static str = "hot";
    pub const PROMO: &'static str = "promo";

    pub fn new(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() {
            Self::default()
        } else {
            Self(code.to_string())
        }
    }

    /// Category of a stored record: the explicit code if any, otherwise
    /// `hot` or `regular` depending on the legacy flag.
    pub fn infer(stored: Option<&str>, legacy_hot: bool) -> Self {
        match stored.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => Self(code.to_string()),
            None if legacy_hot => Self(Self::HOT.to_string()),
            None => Self::default(),
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn is_hot(&self) -> bool {
        self.0 == Self::HOT
    }
}

impl Default for TourCategory {
    fn default() -> Self {
        Self(Self::REGULAR.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TourWire", into = "TourWire")]
pub struct Tour {
    pub id: String,
    pub title: LocalizedText,
    pub country: LocalizedText,
    pub city: LocalizedText,
    pub dates: DateRange,
    pub adults_min: u32,
    pub adults_max: u32,
    pub price_from: f64,
    pub nights: u32,
    pub image_url: String,
    pub gallery_urls: Vec<String>,
    pub category: TourCategory,
}

impl Default for Tour {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: LocalizedText::default(),
            country: LocalizedText::default(),
            city: LocalizedText::default(),
            dates: DateRange::Empty,
            adults_min: 1,
            adults_max: 1,
            price_from: 0.0,
            nights: 1,
            image_url: String::new(),
            gallery_urls: Vec::new(),
            category: TourCategory::default(),
        }
    }
}

impl Tour {
    /// Derived from the category, never stored on its own.
    pub fn is_hot(&self) -> bool {
        self.category.is_hot()
    }

    pub fn set_category(&mut self, code: &str) {
        self.category = TourCategory::new(code);
    }

    /// Recomputes the untagged title/country/city from the localized values
    /// and assigns the slug id if the record has none yet.
    pub fn prepare_for_save(&mut self) {
        for field in [&mut self.title, &mut self.country, &mut self.city] {
            let generic = field.generic().to_string();
            field.legacy = Some(generic);
        }
        if self.id.trim().is_empty() {
            self.id = slugify(self.title.generic());
        }
    }

    pub fn absolutize_media(&mut self, base: &str) {
        self.image_url = absolutize_upload(&self.image_url, base);
        for url in &mut self.gallery_urls {
            *url = absolutize_upload(url, base);
        }
    }
}

// Flat JSON shape shared with the public site API and the local table.
#[derive(Debug, Serialize, Deserialize)]
struct TourWire {
    #[serde(default, deserialize_with = "nullable")]
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_uz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country_uz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city_ru: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city_uz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city_en: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    start_date: String,
    #[serde(default, deserialize_with = "nullable")]
    end_date: String,
    #[serde(default = "one")]
    adults_min: u32,
    #[serde(default = "one")]
    adults_max: u32,
    #[serde(default)]
    price_from: f64,
    #[serde(default = "one")]
    nights: u32,
    #[serde(default, deserialize_with = "nullable")]
    image_url: String,
    #[serde(default)]
    is_hot: Option<HotFlag>,
    #[serde(default)]
    tour_type: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    gallery_urls: Vec<String>,
}

fn one() -> u32 {
    1
}

/// `is_hot` arrives as 0/1 from SQLite-backed sites and as a bool elsewhere.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
enum HotFlag {
    Bool(bool),
    Int(i64),
}

impl HotFlag {
    fn is_set(self) -> bool {
        match self {
            HotFlag::Bool(b) => b,
            HotFlag::Int(n) => n != 0,
        }
    }
}

impl Serialize for HotFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.is_set()))
    }
}

impl TryFrom<TourWire> for Tour {
    type Error = String;

    fn try_from(wire: TourWire) -> Result<Self, Self::Error> {
        let start = parse_date(&wire.start_date)
            .map_err(|e| format!("Invalid start_date {:?}: {e}", wire.start_date))?;
        let end = parse_date(&wire.end_date)
            .map_err(|e| format!("Invalid end_date {:?}: {e}", wire.end_date))?;
        let legacy_hot = wire.is_hot.is_some_and(HotFlag::is_set);

        Ok(Tour {
            id: wire.id,
            title: LocalizedText {
                legacy: wire.title,
                ru: wire.title_ru,
                uz: wire.title_uz,
                en: wire.title_en,
            },
            country: LocalizedText {
                legacy: wire.country,
                ru: wire.country_ru,
                uz: wire.country_uz,
                en: wire.country_en,
            },
            city: LocalizedText {
                legacy: wire.city,
                ru: wire.city_ru,
                uz: wire.city_uz,
                en: wire.city_en,
            },
            dates: DateRange::from_bounds(start, end),
            adults_min: wire.adults_min,
            adults_max: wire.adults_max,
            price_from: wire.price_from,
            nights: wire.nights,
            image_url: wire.image_url,
            gallery_urls: wire.gallery_urls,
            category: TourCategory::infer(wire.tour_type.as_deref(), legacy_hot),
        })
    }
}

impl From<Tour> for TourWire {
    fn from(tour: Tour) -> Self {
        let is_hot = tour.is_hot();
        TourWire {
            id: tour.id,
            title: tour.title.legacy,
            title_ru: tour.title.ru,
            title_uz: tour.title.uz,
            title_en: tour.title.en,
            country: tour.country.legacy,
            country_ru: tour.country.ru,
            country_uz: tour.country.uz,
            country_en: tour.country.en,
            city: tour.city.legacy,
            city_ru: tour.city.ru,
            city_uz: tour.city.uz,
            city_en: tour.city.en,
            start_date: tour.dates.start().map(format_date).unwrap_or_default(),
            end_date: tour.dates.end().map(format_date).unwrap_or_default(),
            adults_min: tour.adults_min,
            adults_max: tour.adults_max,
            price_from: tour.price_from,
            nights: tour.nights,
            image_url: tour.image_url,
            is_hot: Some(HotFlag::Bool(is_hot)),
            tour_type: Some(tour.category.code().to_string()),
            gallery_urls: tour.gallery_urls,
        }
    }
}
