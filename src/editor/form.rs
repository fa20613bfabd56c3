use serde::Serialize;

use super::slug::slugify;
use crate::models::{lang::Lang, tour::Tour};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormMode {
    New,
    Edit,
}

/// Edit buffer of the tour modal.
///
/// Text inputs always show the value of the active language. The untagged
/// fields follow that language while editing and are recomputed from the
/// localized values when the payload is built.
#[derive(Debug, Clone)]
pub struct TourForm {
    tour: Tour,
    lang: Lang,
    mode: FormMode,
    snapshot: Tour,
}

impl TourForm {
    pub fn new() -> Self {
        let tour = Tour::default();
        Self {
            snapshot: saved_shape(&tour),
            tour,
            lang: Lang::Ru,
            mode: FormMode::New,
        }
    }

    /// Loads an existing record, filling every language slot through the
    /// fallback chain so switching languages never shows a blank field.
    pub fn open(record: &Tour) -> Self {
        let mut tour = record.clone();
        for field in [&mut tour.title, &mut tour.country, &mut tour.city] {
            field.fill_from_fallbacks();
            field.sync_legacy_with(Lang::Ru);
        }
        Self {
            snapshot: saved_shape(&tour),
            tour,
            lang: Lang::Ru,
            mode: FormMode::Edit,
        }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        self.tour.title.resolve(self.lang)
    }

    pub fn country(&self) -> &str {
        self.tour.country.resolve(self.lang)
    }

    pub fn city(&self) -> &str {
        self.tour.city.resolve(self.lang)
    }

    pub fn switch_lang(&mut self, lang: Lang) {
        self.lang = lang;
        self.sync_generic();
    }

    pub fn set_title(&mut self, value: &str) {
        self.tour.title.set(self.lang, value);
        self.sync_generic();
    }

    /// Id the record will be saved under.
    pub fn id_preview(&self) -> String {
        if self.tour.id.is_empty() {
            slugify(self.tour.title.generic())
        } else {
            self.tour.id.clone()
        }
    }

    pub fn set_country(&mut self, value: &str) {
        self.tour.country.set(self.lang, value);
        self.sync_generic();
    }

    pub fn set_city(&mut self, value: &str) {
        self.tour.city.set(self.lang, value);
        self.sync_generic();
    }

    /// Min and max persons are edited as one number, never below 1.
    pub fn set_persons(&mut self, persons: u32) {
        let persons = persons.max(1);
        self.tour.adults_min = persons;
        self.tour.adults_max = persons;
    }

    pub fn set_category(&mut self, code: &str) {
        self.tour.set_category(code);
    }

    pub fn set_price(&mut self, price: f64) {
        self.tour.price_from = price.max(0.0);
    }

    pub fn set_nights(&mut self, nights: u32) {
        self.tour.nights = nights;
    }

    pub fn set_image(&mut self, url: impl Into<String>) {
        self.tour.image_url = url.into();
    }

    pub fn click_day(&mut self, day: chrono::NaiveDate) -> super::range::PickerAction {
        self.tour.dates.click(day)
    }

    /// Appends in upload order.
    pub fn push_gallery(&mut self, url: impl Into<String>) {
        self.tour.gallery_urls.push(url.into());
    }

    pub fn remove_gallery(&mut self, index: usize) -> Option<String> {
        (index < self.tour.gallery_urls.len()).then(|| self.tour.gallery_urls.remove(index))
    }

    /// Compares what would be saved, so switching languages alone does not
    /// count as an edit.
    pub fn is_dirty(&self) -> bool {
        self.to_payload() != self.snapshot
    }

    /// Record to send on save: untagged fields recomputed, id derived once.
    pub fn to_payload(&self) -> Tour {
        saved_shape(&self.tour)
    }

    /// After a successful save the form switches to edit mode on the saved
    /// record, and the id is frozen.
    pub fn mark_saved(&mut self, saved: Tour) {
        self.snapshot = saved_shape(&saved);
        self.tour = saved;
        self.mode = FormMode::Edit;
    }

    fn sync_generic(&mut self) {
        let lang = self.lang;
        for field in [&mut self.tour.title, &mut self.tour.country, &mut self.tour.city] {
            field.sync_legacy_with(lang);
        }
    }
}

fn saved_shape(tour: &Tour) -> Tour {
    let mut payload = tour.clone();
    payload.prepare_for_save();
    payload
}

impl Default for TourForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Response shape of `GET /api/site/tours/{id}/edit`.
#[derive(Debug, Serialize)]
pub struct FormView {
    pub lang: Lang,
    pub mode: FormMode,
    pub id: String,
    pub title: String,
    pub country: String,
    pub city: String,
    pub tour: Tour,
}

impl From<&TourForm> for FormView {
    fn from(form: &TourForm) -> Self {
        FormView {
            lang: form.lang(),
            mode: form.mode(),
            id: form.id_preview(),
            title: form.title().to_string(),
            country: form.country().to_string(),
            city: form.city().to_string(),
            tour: form.tour().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tour::LocalizedText;
    use chrono::NaiveDate;

    fn legacy_tour() -> Tour {
        Tour {
            id: "samarkand-tour".into(),
            title: LocalizedText::from_legacy("Samarkand Tour"),
            country: LocalizedText::from_legacy("Uzbekistan"),
            city: LocalizedText::from_legacy("Samarkand"),
            ..Tour::default()
        }
    }

    #[test]
    fn legacy_title_shows_in_every_language() {
        let mut form = TourForm::open(&legacy_tour());
        assert_eq!(form.mode(), FormMode::Edit);
        for lang in Lang::ALL {
            form.switch_lang(lang);
            assert_eq!(form.title(), "Samarkand Tour");
            assert_eq!(form.city(), "Samarkand");
        }
        assert!(!form.is_dirty());
    }

    #[test]
    fn generic_field_follows_active_language() {
        let mut form = TourForm::open(&legacy_tour());
        form.switch_lang(Lang::Uz);
        form.set_title("Samarqand sayohati");
        assert_eq!(form.tour().title.legacy.as_deref(), Some("Samarqand sayohati"));
        assert!(form.is_dirty());

        // ru still holds the fallback and wins at save time
        let payload = form.to_payload();
        assert_eq!(payload.title.legacy.as_deref(), Some("Samarkand Tour"));
        assert_eq!(payload.title.uz.as_deref(), Some("Samarqand sayohati"));
    }

    #[test]
    fn new_tour_with_english_title_only() {
        let mut form = TourForm::new();
        form.switch_lang(Lang::En);
        form.set_title("Baku -- City!! ");
        form.set_country("Azerbaijan");
        form.set_city("Baku");

        let payload = form.to_payload();
        assert_eq!(payload.id, "baku-city");
        assert_eq!(payload.title.legacy.as_deref(), Some("Baku -- City!! "));
        assert_eq!(payload.country.legacy.as_deref(), Some("Azerbaijan"));
    }

    #[test]
    fn id_is_frozen_once_saved() {
        let mut form = TourForm::new();
        form.set_title("First name");
        let saved = form.to_payload();
        assert_eq!(saved.id, "first-name");
        form.mark_saved(saved);

        form.set_title("Second name");
        assert_eq!(form.to_payload().id, "first-name");
    }

    #[test]
    fn id_preview_tracks_typing_on_new_record() {
        let mut form = TourForm::new();
        form.set_title("Bu");
        form.set_title("Bukhara");
        assert_eq!(form.id_preview(), "bukhara");
        assert!(form.tour().id.is_empty());
    }

    #[test]
    fn category_drives_hot_flag() {
        let mut form = TourForm::new();
        form.set_category("hot");
        assert!(form.tour().is_hot());
        form.set_category("promo");
        assert!(!form.tour().is_hot());
    }

    #[test]
    fn persons_are_kept_equal_and_positive() {
        let mut form = TourForm::new();
        form.set_persons(0);
        assert_eq!((form.tour().adults_min, form.tour().adults_max), (1, 1));
        form.set_persons(4);
        assert_eq!((form.tour().adults_min, form.tour().adults_max), (4, 4));
    }

    #[test]
    fn gallery_keeps_upload_order() {
        let mut form = TourForm::new();
        form.push_gallery("/uploads/1.jpg");
        form.push_gallery("/uploads/2.jpg");
        assert_eq!(form.remove_gallery(0).as_deref(), Some("/uploads/1.jpg"));
        assert_eq!(form.remove_gallery(5), None);
        assert_eq!(form.tour().gallery_urls, vec!["/uploads/2.jpg".to_string()]);
    }

    #[test]
    fn date_clicks_go_through_range_picker() {
        let mut form = TourForm::new();
        let may = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        form.click_day(may(10));
        form.click_day(may(1));
        assert_eq!(form.tour().dates.start(), Some(may(1)));
        assert_eq!(form.tour().dates.end(), Some(may(10)));
    }
}
