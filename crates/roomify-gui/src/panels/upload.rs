use roomify_core::consts::{PROMPT_SIGNED_IN, PROMPT_SIGNED_OUT, SIZE_HINT};

use crate::app::RoomifyApp;
use crate::messages::WorkerCommand;

const DROP_ZONE_WIDTH: f32 = 420.0;

pub fn show(ctx: &egui::Context, app: &mut RoomifyApp) {
    if app.signed_in {
        app.upload.drag_hover = ctx.input(|i| !i.raw.hovered_files.is_empty());
        if let Some(file) = ctx.input(|i| i.raw.dropped_files.first().cloned()) {
            app.submit_dropped(file);
        }
    } else {
        app.upload.drag_hover = false;
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading("Upload your floor plan");
            ui.add_space(12.0);

            drop_zone(ui, app);
            ui.add_space(12.0);
            progress_section(ui, app);
        });
    });
}

fn drop_zone(ui: &mut egui::Ui, app: &RoomifyApp) {
    let visuals = ui.visuals();
    let stroke_color = if app.upload.drag_hover {
        visuals.selection.stroke.color
    } else {
        visuals.widgets.noninteractive.bg_stroke.color
    };

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(2.0, stroke_color))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(DROP_ZONE_WIDTH);
            ui.vertical_centered(|ui| {
                let prompt = if app.signed_in {
                    PROMPT_SIGNED_IN
                } else {
                    PROMPT_SIGNED_OUT
                };
                ui.label(prompt);
                ui.add_space(8.0);

                let button = egui::Button::new("Select file...");
                if ui.add_enabled(app.signed_in, button).clicked() {
                    open_picker(app);
                }
            });
        });
}

fn open_picker(app: &RoomifyApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Floor plans", &["jpg", "jpeg", "png"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SubmitPath(path));
        }
    });
}

fn progress_section(ui: &mut egui::Ui, app: &RoomifyApp) {
    let status = &app.upload.status;

    if app.upload.shows_progress() {
        ui.add(
            egui::ProgressBar::new(f32::from(status.percent) / 100.0)
                .desired_width(DROP_ZONE_WIDTH)
                .text(status.status_text())
                .animate(status.phase.is_in_flight()),
        );
    }

    if let Some(ref name) = status.file_name {
        ui.label(name);
    }

    if let Some(error) = app.upload.error() {
        ui.colored_label(ui.visuals().error_fg_color, error);
    }

    ui.add_space(8.0);
    ui.small(SIZE_HINT);
}
