use roomify_core::visualizer::VisualizerContent;

use crate::app::RoomifyApp;
use crate::states::Page;

pub fn show(ctx: &egui::Context, app: &mut RoomifyApp) {
    let mut back = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        let Page::Visualizer(ref state) = app.page else {
            return;
        };

        ui.horizontal(|ui| {
            back = ui.button("Back").clicked();
            ui.heading(state.view.heading());
            if let Some(size) = state.image_size {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(format!("{}x{}", size[0], size[1]));
                });
            }
        });
        ui.separator();

        match (&state.texture, state.view.content()) {
            (Some(texture), _) => {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                });
            }
            (None, VisualizerContent::Ready(image)) => {
                ui.label(format!("Received {}", image.media_type()));
                if let Some(ref error) = state.decode_error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }
            }
            (None, VisualizerContent::Loading) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(state.view.loading_text());
                });
            }
        }
    });

    if back {
        app.close_visualizer();
    }
}
