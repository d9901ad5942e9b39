//! Gauge preview panel
//!
//! Draws a horizontal gauge colored with the host's committed thresholds,
//! a needle at the preview reading, and the host's JSON view of the list.

use eframe::egui;
use egui::{pos2, vec2, Rect, RichText, Sense, Stroke};
use thresholds::{format_value, thresholds_to_json, ThemeColors};

use crate::presentation::gauge::{gauge_segments, value_color};
use crate::state::{HostState, GAUGE_MAX, GAUGE_MIN};

const GAUGE_HEIGHT: f32 = 28.0;
const NEEDLE_OVERHANG: f32 = 4.0;

/// Renders the gauge preview for the host's thresholds.
pub fn render_gauge_panel(ui: &mut egui::Ui, host: &mut HostState, colors: &ThemeColors) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(vec2(width, GAUGE_HEIGHT + 2.0 * NEEDLE_OVERHANG), Sense::hover());
    let bar = Rect::from_min_max(
        pos2(rect.left(), rect.top() + NEEDLE_OVERHANG),
        pos2(rect.right(), rect.bottom() - NEEDLE_OVERHANG),
    );
    let to_x = |value: f64| {
        let t = ((value - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN)) as f32;
        bar.left() + t * bar.width()
    };

    let painter = ui.painter();
    for segment in gauge_segments(host.thresholds(), GAUGE_MIN, GAUGE_MAX) {
        let segment_rect = Rect::from_min_max(
            pos2(to_x(segment.start), bar.top()),
            pos2(to_x(segment.end), bar.bottom()),
        );
        painter.rect_filled(segment_rect, 0.0, segment.color);
    }
    painter.rect_stroke(bar, 0.0, Stroke::new(1.0, colors.border), egui::StrokeKind::Outside);

    let needle_x = to_x(host.preview_value());
    painter.line_segment(
        [pos2(needle_x, rect.top()), pos2(needle_x, rect.bottom())],
        Stroke::new(2.0, colors.needle),
    );

    ui.add_space(6.0);
    ui.add(egui::Slider::new(host.preview_value_mut(), GAUGE_MIN..=GAUGE_MAX).text("Reading"));

    let reading = host.preview_value();
    ui.horizontal(|ui| {
        ui.label("Band color:");
        ui.label(
            RichText::new(format!("■ {}", format_value(reading)))
                .color(value_color(host.thresholds(), reading))
                .strong(),
        );
    });

    ui.add_space(6.0);
    egui::CollapsingHeader::new("Host data")
        .default_open(false)
        .show(ui, |ui| match thresholds_to_json(host.thresholds()) {
            Ok(json) => {
                ui.label(RichText::new(json).monospace().color(colors.text_dim));
            }
            Err(err) => {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, format!("Cannot display thresholds: {err}"));
            }
        });
}
