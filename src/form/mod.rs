/// Filter panel controller: the form draft and its event handlers.
///
/// The UI layer feeds edits in and executes the returned [`FormAction`]s;
/// everything here is pure state manipulation, testable without a window.
pub mod debounce;
pub mod sanitize;

use std::time::{Duration, Instant};

use crate::data::filter::CourseQuery;
use debounce::Debounce;
use sanitize::{normalize_price, sanitize_price};

/// Sentinel select value meaning "no constraint".
pub const ALL: &str = "all";

/// Quiet period after the last price keystroke before auto-submitting.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// What the caller must do after a form event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// Apply the form to the listing now.
    Submit,
}

/// The two price-range fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    Min,
    Max,
}

// ---------------------------------------------------------------------------
// FilterForm – draft state of the filter panel
// ---------------------------------------------------------------------------

/// The editable filter form. Selects hold wire codes with [`ALL`] as the
/// unfiltered default; price fields hold the raw (sanitized) text.
#[derive(Debug, Clone)]
pub struct FilterForm {
    pub category: String,
    pub level: String,
    pub format: String,
    pub price_min: String,
    pub price_max: String,
    pub search: String,
    debounce: Debounce,
}

impl Default for FilterForm {
    fn default() -> Self {
        FilterForm {
            category: ALL.to_string(),
            level: ALL.to_string(),
            format: ALL.to_string(),
            price_min: String::new(),
            price_max: String::new(),
            search: String::new(),
            debounce: Debounce::new(SUBMIT_DELAY),
        }
    }
}

impl FilterForm {
    /// A select changed: store the code and submit immediately.
    pub fn change_category(&mut self, code: String) -> FormAction {
        self.category = code;
        FormAction::Submit
    }

    /// A select changed: store the code and submit immediately.
    pub fn change_level(&mut self, code: String) -> FormAction {
        self.level = code;
        FormAction::Submit
    }

    /// A select changed: store the code and submit immediately.
    pub fn change_format(&mut self, code: String) -> FormAction {
        self.format = code;
        FormAction::Submit
    }

    /// A price field was edited: sanitize in place and re-arm the debounce.
    /// Submission happens later through [`tick`](FilterForm::tick).
    pub fn edit_price(&mut self, field: PriceField, text: &str, now: Instant) -> FormAction {
        *self.price_field_mut(field) = sanitize_price(text);
        self.debounce.poke(now);
        FormAction::None
    }

    /// A price field lost focus: strip leading zeros or clear the field.
    pub fn blur_price(&mut self, field: PriceField) {
        let slot = self.price_field_mut(field);
        *slot = normalize_price(slot);
    }

    /// The search text changed. Free text never auto-submits; it rides along
    /// with the next submission.
    pub fn edit_search(&mut self, text: &str) -> FormAction {
        self.search = text.to_string();
        FormAction::None
    }

    /// Advance the debounce clock. Returns [`FormAction::Submit`] once per
    /// elapsed quiet period.
    pub fn tick(&mut self, now: Instant) -> FormAction {
        if self.debounce.poll(now) {
            FormAction::Submit
        } else {
            FormAction::None
        }
    }

    /// Time until the pending auto-submission, if one is armed. Lets the app
    /// schedule a wake-up instead of spinning.
    pub fn pending_submit_in(&self, now: Instant) -> Option<Duration> {
        self.debounce.remaining(now)
    }

    /// Back to the unfiltered defaults; any pending auto-submission is
    /// dropped with the draft.
    pub fn reset(&mut self) {
        *self = FilterForm::default();
    }

    /// Build the query to submit. Empty text fields and `all` selects are
    /// omitted so the applied query never carries blank parameters.
    pub fn to_query(&self) -> CourseQuery {
        CourseQuery {
            category: select_value(&self.category),
            level: select_value(&self.level),
            format: select_value(&self.format),
            price_min: self.price_min.parse().ok(),
            price_max: self.price_max.parse().ok(),
            search: text_value(&self.search),
        }
    }

    fn price_field_mut(&mut self, field: PriceField) -> &mut String {
        match field {
            PriceField::Min => &mut self.price_min,
            PriceField::Max => &mut self.price_max,
        }
    }
}

fn select_value(code: &str) -> Option<String> {
    if code.is_empty() || code == ALL {
        None
    } else {
        Some(code.to_string())
    }
}

fn text_value(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_change_submits_immediately() {
        let mut form = FilterForm::default();
        assert_eq!(form.change_level("pro".into()), FormAction::Submit);
        assert_eq!(form.level, "pro");
        // No debounce involved.
        assert_eq!(form.pending_submit_in(Instant::now()), None);
    }

    #[test]
    fn price_edit_defers_submission() {
        let t0 = Instant::now();
        let mut form = FilterForm::default();

        assert_eq!(
            form.edit_price(PriceField::Min, "5x00", t0),
            FormAction::None
        );
        assert_eq!(form.price_min, "500");
        assert_eq!(form.tick(t0 + Duration::from_millis(999)), FormAction::None);
        assert_eq!(
            form.tick(t0 + Duration::from_millis(1000)),
            FormAction::Submit
        );
    }

    #[test]
    fn continuous_typing_holds_the_submission() {
        let t0 = Instant::now();
        let mut form = FilterForm::default();
        let mut submissions = 0;

        for i in 0..5 {
            form.edit_price(PriceField::Max, &"9".repeat(i + 1), t0 + i as u32 * Duration::from_millis(500));
        }
        for ms in (0..6000).step_by(100) {
            if form.tick(t0 + Duration::from_millis(ms)) == FormAction::Submit {
                submissions += 1;
            }
        }
        assert_eq!(submissions, 1);
    }

    #[test]
    fn empty_fields_are_omitted_from_the_query() {
        let mut form = FilterForm::default();
        form.change_category("ml".into());
        form.edit_price(PriceField::Min, "500", Instant::now());
        form.edit_search("  ");

        let query = form.to_query();
        assert_eq!(query.category.as_deref(), Some("ml"));
        assert_eq!(query.price_min, Some(500));
        assert_eq!(query.level, None);
        assert_eq!(query.format, None);
        assert_eq!(query.price_max, None);
        assert_eq!(query.search, None);
    }

    #[test]
    fn reset_restores_defaults_and_drops_pending_submit() {
        let t0 = Instant::now();
        let mut form = FilterForm::default();
        form.change_level("pro".into());
        form.edit_price(PriceField::Min, "100", t0);

        form.reset();
        assert_eq!(form.level, ALL);
        assert_eq!(form.price_min, "");
        assert_eq!(form.tick(t0 + Duration::from_millis(2000)), FormAction::None);
        assert!(form.to_query().is_empty());
    }
}
