use crate::app::RoomifyApp;

pub fn show(ctx: &egui::Context, app: &mut RoomifyApp) {
    egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Roomify");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Stand-in for a real identity provider.
                let label = if app.signed_in { "Log Out" } else { "Log In" };
                if ui.button(label).clicked() {
                    app.set_signed_in(!app.signed_in);
                }
            });
        });
        ui.add_space(4.0);
    });
}
