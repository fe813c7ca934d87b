//! Scanner Modal Component
//!
//! "AI Eco-Scanner": the player picks a photo of an eco-action and sees a
//! preview before it is sent off for analysis. Analysis itself happens on
//! the server and is not part of the desktop app.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus::prelude::*;
use ecoloop_core::OverlayId;
use ecoloop_ui::{Button, ButtonVariant, OverlayFrame};
use image::ImageFormat;
use rfd::FileDialog;

/// Longest edge of the preview thumbnail
const PREVIEW_EDGE: u32 = 480;

/// Load a photo, shrink it, and return it as a PNG data URL.
pub fn encode_preview(path: &Path) -> Result<String, image::ImageError> {
    let img = image::open(path)?;
    let thumb = img.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE);

    let mut buffer = Vec::new();
    thumb.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buffer)))
}

#[component]
pub fn ScannerModal(
    /// Whether the overlay is visible
    is_open: bool,
    /// Dismissal callback
    on_close: EventHandler<()>,
) -> Element {
    let mut preview = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let pick_photo = move |_: ()| {
        loading.set(true);
        error.set(None);

        spawn(async move {
            // File dialog blocks, keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select a photo of your eco-action")
                    .pick_file()
                    .map(|path| {
                        let encoded = encode_preview(&path);
                        (path, encoded)
                    })
            })
            .await;

            match picked {
                Ok(Some((path, Ok(data_url)))) => {
                    tracing::info!(path = ?path, "Loaded scanner photo");
                    preview.set(Some(data_url));
                }
                Ok(Some((path, Err(e)))) => {
                    tracing::warn!(path = ?path, error = %e, "Failed to load scanner photo");
                    error.set(Some(format!("Could not read that image: {}", e)));
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {:?}", e)));
                }
            }
            loading.set(false);
        });
    };

    let close = move |_: ()| {
        preview.set(None);
        error.set(None);
        on_close.call(());
    };

    rsx! {
        OverlayFrame {
            overlay: OverlayId::Scanner,
            is_open: is_open,
            on_close: close,
            subtitle: "Snap a recycling run, a refill, a bike commute".to_string(),

            div { class: "scanner-body",
                if let Some(src) = preview() {
                    img { class: "scanner-preview", src: "{src}", alt: "Selected photo" }
                } else {
                    div { class: "scanner-dropzone",
                        {crate::components::icons::camera()}
                        p { "No photo selected" }
                    }
                }

                if let Some(err) = error() {
                    p { class: "scanner-error", "⚠️ {err}" }
                }

                div { class: "scanner-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: loading(),
                        onclick: pick_photo,
                        if loading() { "Opening..." } else if preview().is_some() { "Choose another" } else { "Choose photo" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_is_png_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("refill.png");
        image::RgbImage::from_pixel(64, 32, image::Rgb([22, 163, 74]))
            .save(&path)
            .unwrap();

        let url = encode_preview(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn preview_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(encode_preview(&path).is_err());
    }
}
