#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use roomify_core::config::UploadConfig;
use roomify_core::error::UploadError;
use roomify_core::upload::{EncodedImage, UploadController, UploadListener, UploadTarget};

pub const MIB: usize = 1024 * 1024;

/// Everything a listener was told, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Progress(u8),
    Complete(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<Event>>,
}

impl RecordingListener {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn progress(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Progress(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Complete(uri) => Some(uri),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(reason) => Some(reason),
                _ => None,
            })
            .collect()
    }
}

impl UploadListener for RecordingListener {
    fn on_progress(&self, percent: u8) {
        self.events.lock().unwrap().push(Event::Progress(percent));
    }

    fn on_complete(&self, image: EncodedImage) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Complete(image.into_string()));
    }

    fn on_error(&self, error: &UploadError) {
        self.events.lock().unwrap().push(Event::Error(error.reason()));
    }
}

/// Controller with default config, signed in, reporting to `listener`.
pub fn signed_in_controller(listener: Arc<RecordingListener>) -> UploadController {
    let mut controller = UploadController::new(UploadConfig::default(), listener);
    controller.set_signed_in(true);
    controller
}

/// In-memory upload of `size` zero bytes.
pub fn target(name: &str, size: usize, declared_type: &str) -> UploadTarget {
    UploadTarget::from_bytes(name, vec![0u8; size], Some(declared_type.to_string()))
}

/// A real, decodable PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 180, 40]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}
