use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Course listing (central panel)
// ---------------------------------------------------------------------------

/// Render the visible courses as cards in the central panel.
pub fn course_listing(ui: &mut Ui, state: &AppState) {
    let catalog = match &state.catalog {
        Some(catalog) => catalog,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Откройте файл каталога  (File → Open…)");
            });
            return;
        }
    };

    if state.visible_indices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Ничего не найдено");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in &state.visible_indices {
                let course = &catalog.courses[idx];

                ui.horizontal(|ui: &mut Ui| {
                    if let Some(colors) = &state.category_colors {
                        ui.label(
                            RichText::new(&course.category)
                                .color(colors.color_for(&course.category))
                                .strong(),
                        );
                    }
                    ui.heading(&course.title);
                });

                let mut meta = vec![
                    course.level.label().to_string(),
                    course.format.label().to_string(),
                ];
                if !course.provider.is_empty() {
                    meta.insert(0, course.provider.clone());
                }
                if !course.duration.is_empty() {
                    meta.push(course.duration.clone());
                }
                ui.label(meta.join("  •  "));

                let price = if course.price_from == 0 {
                    "Бесплатно".to_string()
                } else {
                    format!("от {} ₽", course.price_from)
                };
                ui.label(RichText::new(price).strong());

                if !course.short_desc.is_empty() {
                    ui.label(RichText::new(&course.short_desc).weak());
                }
                if !course.tags.is_empty() {
                    let tags: Vec<String> =
                        course.tags.iter().map(|t| format!("#{t}")).collect();
                    ui.label(RichText::new(tags.join(" ")).small().weak());
                }

                ui.separator();
            }
        });
}
