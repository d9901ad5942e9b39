//! Titled panel wrapping a group of options.

use egui::{InnerResponse, RichText, Ui};

/// Renders `add_contents` inside a framed group headed by `title`.
pub fn options_group<R>(
    ui: &mut Ui,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    egui::Frame::group(ui.style())
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong());
            ui.separator();
            add_contents(ui)
        })
}
