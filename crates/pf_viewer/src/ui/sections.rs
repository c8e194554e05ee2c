use std::time::Instant;

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use tracing::{error, info};

use pf_content::content::ContactLink;
use pf_navigation::resolve::SectionExtent;
use pf_navigation::section::Section;

use crate::app::App;

/// The scrolling page. Exactly one section is mounted at a time (per the
/// transition); its extent is recorded in document coordinates so the
/// resolver can query it live.
pub fn central_page(ctx: &egui::Context, app: &mut App, now: Instant) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false; 2]);

        if let Some(animation) = &app.smooth_scroll {
            scroll_area = scroll_area.vertical_scroll_offset(animation.offset_at(now));
        }

        let output = scroll_area.show(ui, |ui| {
            render_mounted_section(app, ui, now);
        });

        app.scroll_offset = output.state.offset.y;
        app.viewport_height = output.inner_rect.height();

        if let Some(animation) = &app.smooth_scroll {
            if animation.finished(now) {
                app.smooth_scroll = None;
            }
        }
    });
}

fn render_mounted_section(app: &mut App, ui: &mut egui::Ui, now: Instant) {
    let mounted = app.transition.mounted_section();
    let opacity = app.transition.opacity(now);
    let interactive = app.transition.interactive();

    let content_origin = ui.max_rect().top();
    let top = ui.cursor().top();

    ui.scope(|ui| {
        // An exiting section stays visible while it fades but is no longer
        // interactive
        ui.set_enabled(interactive);
        fade_text(ui, opacity);

        ui.set_min_height(app.viewport_height);

        match mounted {
            Section::Home => home_section(app, ui),
            Section::About => about_section(app, ui),
            Section::Skills => skills_section(app, ui),
            Section::Projects => projects_section(app, ui),
            Section::Contact => contact_section(app, ui),
        }
    });

    let bottom = ui.cursor().top();

    app.geometry.clear();
    app.geometry.record(
        mounted,
        SectionExtent::new(top - content_origin, bottom - top),
    );
}

fn fade_text(ui: &mut egui::Ui, opacity: f32) {
    if opacity < 1.0 {
        let faded = ui.visuals().text_color().linear_multiply(opacity);
        ui.visuals_mut().override_text_color = Some(faded);
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .color(egui::Color32::from_rgb(168, 85, 247))
                .size(32.0),
        );
        ui.label(egui::RichText::new(subtitle).weak());
    });

    ui.add_space(24.0);
}

fn home_section(app: &mut App, ui: &mut egui::Ui) {
    ui.add_space(80.0);

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("Hi, I'm {}", app.profile.name))
                .color(egui::Color32::from_rgb(168, 85, 247))
                .size(48.0),
        );

        ui.add_space(12.0);
        ui.label(egui::RichText::new(app.profile.tagline.clone()).size(18.0));

        ui.add_space(24.0);
        if ui.button("Get In Touch").clicked() {
            app.controller.select_section(Section::Contact);
        }
    });
}

fn about_section(app: &mut App, ui: &mut egui::Ui) {
    section_heading(ui, "About Me", "My journey in the digital world");

    ui.columns(2, |columns| {
        columns[0].strong("My Story");
        for idx in 0..app.profile.story.len() {
            columns[0].label(app.profile.story[idx].clone());
            columns[0].add_space(8.0);
        }

        if columns[0].button("⬇ Download Resume").clicked() {
            save_resume(&app.profile.resume);
        }

        columns[1].strong("What I Do");
        for idx in 0..app.profile.services.len() {
            let service = &app.profile.services[idx];
            columns[1].label(egui::RichText::new(service.title.clone()).strong());
            columns[1].label(service.description.clone());
            columns[1].add_space(8.0);
        }
    });
}

fn save_resume(resume: &str) {
    if let Some(path) = rfd::FileDialog::new()
        .set_file_name("resume.txt")
        .save_file()
    {
        match std::fs::write(&path, resume) {
            Ok(()) => info!("Resume saved to {}", path.display()),
            Err(e) => error!("Failed to write file: {}", e),
        }
    }
}

fn skills_section(app: &mut App, ui: &mut egui::Ui) {
    section_heading(ui, "My Skills", "Technologies I work with");

    ui.strong("Technical Skills");
    egui::Grid::new("skills_grid")
        .num_columns(2)
        .spacing([40.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            for idx in 0..app.profile.skills.len() {
                let skill = &app.profile.skills[idx];

                ui.label(skill.name.clone());
                ui.add(
                    egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                        .desired_width(300.0)
                        .show_percentage(),
                );
                ui.end_row();
            }
        });

    ui.add_space(24.0);

    ui.strong("Tools & Platforms");
    ui.horizontal_wrapped(|ui| {
        for idx in 0..app.profile.tools.len() {
            ui.label(format!("🔧 {}", app.profile.tools[idx].name));
            ui.add_space(8.0);
        }
    });
}

fn projects_section(app: &mut App, ui: &mut egui::Ui) {
    section_heading(
        ui,
        "My Projects",
        "Selected works that showcase my capabilities",
    );

    for idx in 0..app.profile.projects.len() {
        let project = &app.profile.projects[idx];

        ui.group(|ui| {
            ui.label(
                egui::RichText::new(project.title.clone())
                    .strong()
                    .size(18.0),
            );
            ui.label(project.description.clone());

            ui.horizontal_wrapped(|ui| {
                for tech in &project.technologies {
                    ui.small(format!("[{}]", tech));
                }
            });
        });

        ui.add_space(12.0);
    }
}

fn contact_section(app: &mut App, ui: &mut egui::Ui) {
    section_heading(ui, "Get In Touch", "Let's create something amazing together");

    ui.columns(2, |columns| {
        contact_links_table(&app.profile.contact_links, &mut columns[0]);
        contact_form_ui(app, &mut columns[1]);
    });
}

fn contact_links_table(links: &[ContactLink], ui: &mut egui::Ui) {
    ui.strong("Contact Information");

    let table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::remainder());

    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Channel");
            });

            header.col(|ui| {
                ui.strong("Where");
            });
        })
        .body(|mut body| {
            for link in links {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(link.title.clone());
                    });

                    row.col(|ui| {
                        ui.hyperlink_to(link.value.clone(), link.link.clone());
                    });
                });
            }
        });
}

fn contact_form_ui(app: &mut App, ui: &mut egui::Ui) {
    ui.strong("Send Me A Message");

    ui.add(egui::TextEdit::singleline(&mut app.form.name).hint_text("Your Name"));
    ui.add(egui::TextEdit::singleline(&mut app.form.email).hint_text("Your Email"));
    ui.add(
        egui::TextEdit::multiline(&mut app.form.message)
            .hint_text("Your Message")
            .desired_rows(5),
    );

    if ui.button("Send Message").clicked() {
        match app.form.submit() {
            Ok(ack) => {
                app.form_ack = Some(ack);
                app.form_error = None;
            }
            Err(e) => {
                app.form_error = Some(e);
                app.form_ack = None;
            }
        }
    }

    if let Some(ack) = &app.form_ack {
        ui.colored_label(egui::Color32::LIGHT_GREEN, ack.message.clone());
    }

    if let Some(e) = &app.form_error {
        ui.colored_label(egui::Color32::LIGHT_RED, e.to_string());
    }
}
