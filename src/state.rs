use std::time::Instant;

use crate::color::CategoryColors;
use crate::data::filter::{filtered_indices, CourseQuery};
use crate::data::model::CourseCatalog;
use crate::form::{FilterForm, FormAction};
use crate::query::{self, active_filters};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog (None until user loads a file).
    pub catalog: Option<CourseCatalog>,

    /// Draft state of the filter panel (not yet applied).
    pub form: FilterForm,

    /// The applied query; only changed by submission or reset.
    pub applied: CourseQuery,

    /// Listing location string for the applied query (`/courses?...`).
    pub location: String,

    /// Indices of courses passing the applied query (cached).
    pub visible_indices: Vec<usize>,

    /// Badge colours per category.
    pub category_colors: Option<CategoryColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            form: FilterForm::default(),
            applied: CourseQuery::default(),
            location: query::LISTING_PATH.to_string(),
            visible_indices: Vec::new(),
            category_colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog; filters start from the clean defaults.
    pub fn set_catalog(&mut self, catalog: CourseCatalog) {
        self.form = FilterForm::default();
        self.applied = CourseQuery::default();
        self.location = query::LISTING_PATH.to_string();
        self.visible_indices = (0..catalog.len()).collect();
        self.category_colors = Some(CategoryColors::new(&catalog.categories));

        self.catalog = Some(catalog);
        self.status_message = None;
        self.loading = false;
    }

    /// Execute a form action produced by the panel.
    pub fn handle_action(&mut self, action: FormAction) {
        if action == FormAction::Submit {
            self.submit_form();
        }
    }

    /// Advance the auto-submit clock; fires at most once per quiet period.
    pub fn tick(&mut self, now: Instant) {
        let action = self.form.tick(now);
        self.handle_action(action);
    }

    /// Apply the form draft to the listing and log the active filters.
    pub fn submit_form(&mut self) {
        self.applied = self.form.to_query();
        self.location = query::location(&self.applied);
        self.refilter();

        let entries = active_filters(&self.applied);
        if !entries.is_empty() {
            let summary: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
            log::info!("active filters: {}", summary.join("; "));
        }
    }

    /// Discard all filters and return to the unfiltered listing.
    pub fn reset_filters(&mut self) {
        self.form.reset();
        self.applied = CourseQuery::default();
        self.location = query::LISTING_PATH.to_string();
        self.refilter();
    }

    /// Recompute `visible_indices` from the applied query.
    pub fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = filtered_indices(catalog, &self.applied);
        }
    }
}
