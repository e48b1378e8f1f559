mod app;
mod convert;
mod listener;
mod messages;
mod panels;
mod states;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Roomify")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Roomify",
        options,
        Box::new(|cc| Ok(Box::new(app::RoomifyApp::new(&cc.egui_ctx)?))),
    )
}
