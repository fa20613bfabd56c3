//! Typed view of the public site's content document.
//!
//! The document is one JSON object per language. Only the sections the admin
//! edits are typed; every other key is carried along in `extra` so a save
//! never drops data owned by the public site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lang::Lang, nullable};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default, deserialize_with = "nullable")]
    pub ru: LocaleContent,
    #[serde(default, deserialize_with = "nullable")]
    pub uz: LocaleContent,
    #[serde(default, deserialize_with = "nullable")]
    pub en: LocaleContent,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteContent {
    pub fn locale(&self, lang: Lang) -> &LocaleContent {
        match lang {
            Lang::Ru => &self.ru,
            Lang::Uz => &self.uz,
            Lang::En => &self.en,
        }
    }

    pub fn locale_mut(&mut self, lang: Lang) -> &mut LocaleContent {
        match lang {
            Lang::Ru => &mut self.ru,
            Lang::Uz => &mut self.uz,
            Lang::En => &mut self.en,
        }
    }

    /// Replaces one section of one language; everything else is kept as is.
    pub fn apply(&mut self, lang: Lang, section: ContentSection) {
        let locale = self.locale_mut(lang);
        match section {
            ContentSection::Header(header) => locale.header = header,
            ContentSection::Hero(hero) => locale.hero = hero,
            ContentSection::Promos(promos) => locale.promos = promos,
            ContentSection::Reviews(reviews) => locale.reviews_list = reviews,
            ContentSection::Gallery(gallery) => locale.gallery = gallery,
            ContentSection::Footer(footer) => locale.footer = footer,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleContent {
    #[serde(default, deserialize_with = "nullable")]
    pub header: Header,
    #[serde(default, deserialize_with = "nullable")]
    pub hero: Hero,
    #[serde(default, deserialize_with = "nullable")]
    pub promos: BTreeMap<String, String>,
    #[serde(default, rename = "reviewsList", deserialize_with = "nullable")]
    pub reviews_list: Vec<Review>,
    #[serde(default, deserialize_with = "nullable")]
    pub gallery: Gallery,
    #[serde(default, deserialize_with = "nullable")]
    pub footer: Footer,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "nullable")]
    pub marquee: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default, deserialize_with = "nullable")]
    pub slides: Vec<Banner>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One hero slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default, deserialize_with = "nullable")]
    pub images: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a single-section save: `{"section": "footer", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "camelCase")]
pub enum ContentSection {
    Header(Header),
    Hero(Hero),
    Promos(BTreeMap<String, String>),
    Reviews(Vec<Review>),
    Gallery(Gallery),
    Footer(Footer),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "ru": {
                "header": { "marquee": "Скидки" },
                "hero": { "slides": [{ "title": "Баку", "image": "/uploads/baku.jpg", "imageMobile": "/uploads/m.jpg" }] },
                "promos": { "summer": "Лето" },
                "reviewsList": [{ "id": "1", "name": "Ali", "city": "Tashkent", "text": "Great", "rating": 5 }],
                "gallery": { "images": ["/uploads/1.jpg"] },
                "footer": { "title": "Qoratosh", "phone": "+998", "email": "a@b.uz", "address": "", "text": "" },
                "about": { "body": "kept" }
            },
            "uz": { "header": { "marquee": "Chegirmalar" } },
            "meta": { "version": 3 }
        })
    }

    #[test]
    fn preserves_untyped_keys_on_round_trip() {
        let content: SiteContent = serde_json::from_value(sample()).unwrap();
        assert_eq!(content.ru.hero.slides[0].title.as_deref(), Some("Баку"));
        assert_eq!(content.en, LocaleContent::default());

        let back = serde_json::to_value(&content).unwrap();
        assert_eq!(back["ru"]["about"], json!({ "body": "kept" }));
        assert_eq!(back["meta"], json!({ "version": 3 }));
        assert_eq!(back["ru"]["reviewsList"][0]["name"], "Ali");
        assert_eq!(back["ru"]["reviewsList"][0]["rating"], 5);
        assert_eq!(back["ru"]["hero"]["slides"][0]["imageMobile"], "/uploads/m.jpg");
    }

    #[test]
    fn null_fields_read_as_empty() {
        let content: SiteContent = serde_json::from_value(json!({
            "ru": {
                "header": { "marquee": null },
                "footer": { "phone": null, "email": "a@b.uz" },
                "reviewsList": [{ "id": "1", "name": null }],
                "gallery": null
            },
            "uz": null
        }))
        .unwrap();

        assert_eq!(content.ru.footer.phone, "");
        assert_eq!(content.ru.footer.email, "a@b.uz");
        assert_eq!(content.ru.header.marquee, "");
        assert_eq!(content.ru.reviews_list[0].name, "");
        assert_eq!(content.ru.gallery, Gallery::default());
        assert_eq!(content.uz, LocaleContent::default());
    }

    #[test]
    fn section_update_leaves_other_sections_and_languages_alone() {
        let mut content: SiteContent = serde_json::from_value(sample()).unwrap();
        let before = content.clone();

        let section: ContentSection = serde_json::from_value(json!({
            "section": "footer",
            "data": { "title": "New title", "phone": "+998 90" }
        }))
        .unwrap();
        content.apply(Lang::Ru, section);

        assert_eq!(content.ru.footer.title, "New title");
        assert_eq!(content.ru.footer.email, "");
        assert_eq!(content.ru.header, before.ru.header);
        assert_eq!(content.ru.gallery, before.ru.gallery);
        assert_eq!(content.ru.extra, before.ru.extra);
        assert_eq!(content.uz, before.uz);
        assert_eq!(content.extra, before.extra);
    }

    #[test]
    fn rejects_unknown_section() {
        let parsed = serde_json::from_value::<ContentSection>(json!({
            "section": "sidebar",
            "data": {}
        }));
        assert!(parsed.is_err());
    }
}
