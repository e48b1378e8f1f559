use std::path::Path;

use console::Style;
use image::DynamicImage;
use roomify_core::handoff::ViewId;
use roomify_core::upload::EncodedImage;
use roomify_core::visualizer::{VisualizerContent, VisualizerView};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    pending: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            pending: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_upload_summary(file: &Path, image: &EncodedImage, view_id: &ViewId, store: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Floor plan uploaded"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(file.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Type"),
        s.value.apply_to(image.media_type())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Encoded"),
        s.value.apply_to(format!("{} bytes", image.as_str().len()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Store"),
        s.path.apply_to(store.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("View id"),
        s.value.apply_to(view_id)
    );
    println!();
    println!("  roomify visualize {}", view_id);
}

pub fn print_visualizer(view: &VisualizerView, preview: Option<&DynamicImage>) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(view.heading()));
    println!();

    if let VisualizerContent::Ready(encoded) = view.content() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Type"),
            s.value.apply_to(encoded.media_type())
        );
    }

    match preview {
        Some(image) => {
            println!(
                "  {:<14}{}",
                s.label.apply_to("Dimensions"),
                s.value
                    .apply_to(format!("{}x{}", image.width(), image.height()))
            );
        }
        None => println!("  {}", s.pending.apply_to(view.loading_text())),
    }
}
