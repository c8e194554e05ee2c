use eframe::egui;

use pf_navigation::section::Section;

use crate::app::App;

pub fn top_panel(ctx: &egui::Context, app: &mut App) {
    egui::TopBottomPanel::top("top_panel_navbar")
        .min_height(32.0)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    egui::RichText::new(format!("💻 {}", app.profile.brand))
                        .color(egui::Color32::from_rgb(168, 85, 247))
                        .size(15.0),
                );

                ui.separator();

                if app.mobile_layout(ctx) {
                    let burger = if app.controller.mobile_menu_open() {
                        "✖"
                    } else {
                        "☰"
                    };

                    if ui.button(burger).clicked() {
                        app.controller.toggle_mobile_menu();
                    }
                } else {
                    nav_links(app, ui);
                }
            });

            if app.mobile_layout(ctx) && app.controller.mobile_menu_open() {
                ui.separator();
                ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                    nav_links(app, ui);
                });
            }
        });
}

fn nav_links(app: &mut App, ui: &mut egui::Ui) {
    let active = app.controller.active_section();

    for section in Section::ALL {
        // The highlight reads the state, the click goes through the
        // controller operation
        if ui
            .selectable_label(active == section, section.title())
            .clicked()
        {
            app.controller.select_section(section);
        }
    }
}
