use eframe::egui;

use crate::app::App;

pub fn bottom_panel(ctx: &egui::Context, app: &mut App) {
    egui::TopBottomPanel::bottom("bottom_footer_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.label(
                egui::RichText::new(format!("💻 {}", app.profile.brand))
                    .color(egui::Color32::from_rgb(168, 85, 247)),
            );

            ui.separator();

            ui.label(format!("© 2024 {}. All rights reserved.", app.profile.name));

            ui.separator();

            for idx in 0..app.profile.contact_links.len() {
                let link = &app.profile.contact_links[idx];
                ui.hyperlink_to(link.title.clone(), link.link.clone());
            }
        });
    });
}
