use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{Format, Level};
use crate::form::{FilterForm, FormAction, PriceField, ALL};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the filter form
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Фильтры");
    ui.separator();

    let categories = match &state.catalog {
        Some(catalog) => catalog.categories.iter().cloned().collect::<Vec<_>>(),
        None => {
            ui.label("Каталог не загружен.");
            return;
        }
    };

    let mut actions: Vec<FormAction> = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Search text ----
            ui.strong("Поиск");
            let mut search = state.form.search.clone();
            if ui.text_edit_singleline(&mut search).changed() {
                actions.push(state.form.edit_search(&search));
            }
            ui.separator();

            // ---- Category select ----
            ui.strong("Категория");
            if let Some(code) = select_box(
                ui,
                "category",
                &state.form.category,
                "Все категории",
                categories.iter().map(|c| (c.clone(), c.clone())),
            ) {
                actions.push(state.form.change_category(code));
            }
            ui.separator();

            // ---- Level select ----
            ui.strong("Уровень");
            if let Some(code) = select_box(
                ui,
                "level",
                &state.form.level,
                "Любой уровень",
                Level::ALL
                    .iter()
                    .map(|l| (l.code().to_string(), l.label().to_string())),
            ) {
                actions.push(state.form.change_level(code));
            }
            ui.separator();

            // ---- Format select ----
            ui.strong("Формат");
            if let Some(code) = select_box(
                ui,
                "format",
                &state.form.format,
                "Любой формат",
                Format::ALL
                    .iter()
                    .map(|f| (f.code().to_string(), f.label().to_string())),
            ) {
                actions.push(state.form.change_format(code));
            }
            ui.separator();

            // ---- Price range ----
            ui.strong("Цена, ₽");
            ui.horizontal(|ui: &mut Ui| {
                ui.label("от");
                actions.push(price_field(ui, &mut state.form, PriceField::Min));
                ui.label("до");
                actions.push(price_field(ui, &mut state.form, PriceField::Max));
            });
            ui.separator();

            // ---- Reset ----
            if ui.button("Сбросить фильтры").clicked() {
                state.reset_filters();
            }
        });

    for action in actions {
        state.handle_action(action);
    }
}

/// A combo box over (code, label) options with an "all" entry on top.
/// Returns the newly picked code, if any.
fn select_box(
    ui: &mut Ui,
    id: &str,
    current: &str,
    all_label: &str,
    options: impl Iterator<Item = (String, String)>,
) -> Option<String> {
    let options: Vec<(String, String)> = options.collect();
    let selected_text = if current == ALL {
        all_label.to_string()
    } else {
        options
            .iter()
            .find(|(code, _)| code == current)
            .map(|(_, label)| label.clone())
            .unwrap_or_else(|| current.to_string())
    };

    let mut picked = None;
    egui::ComboBox::from_id_salt(id.to_string())
        .selected_text(selected_text)
        .width(ui.available_width().min(180.0))
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current == ALL, all_label).clicked() {
                picked = Some(ALL.to_string());
            }
            for (code, label) in &options {
                if ui.selectable_label(current == code, label).clicked() {
                    picked = Some(code.clone());
                }
            }
        });
    picked
}

/// One price input: sanitize on change, normalize on focus loss.
fn price_field(ui: &mut Ui, form: &mut FilterForm, field: PriceField) -> FormAction {
    let mut text = match field {
        PriceField::Min => form.price_min.clone(),
        PriceField::Max => form.price_max.clone(),
    };

    let response = ui.add(
        egui::TextEdit::singleline(&mut text)
            .hint_text("0")
            .desired_width(70.0),
    );

    let mut action = FormAction::None;
    if response.changed() {
        action = form.edit_price(field, &text, Instant::now());
    }
    if response.lost_focus() {
        form.blur_price(field);
    }
    action
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(RichText::new(&state.location).monospace());

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} курсов, {} показано",
                catalog.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open course catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} courses across {} categories",
                    catalog.len(),
                    catalog.categories.len()
                );
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
