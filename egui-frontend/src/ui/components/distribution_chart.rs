//! # Expenses Distribution Chart
//!
//! Donut chart of the expenses breakdown drawn with egui's painting primitives.
//! egui has no native arc support, so each slice is stroked as a series of short
//! line segments along the ring.

use eframe::egui;
use shared::{ChartDataset, LabelKey, Labels};
use std::f32::consts::PI;

use crate::ui::app_state::PricerApp;
use crate::ui::components::chart_renderer::{render_chart_legend, CHART_HEIGHT};
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Configuration for donut appearance
#[derive(Debug, Clone)]
pub struct DonutConfig {
    /// Radius of the ring center line
    pub radius: f32,
    /// Ring thickness
    pub stroke_width: f32,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            radius: 80.0,
            stroke_width: 40.0,
        }
    }
}

/// Angular extent of one slice, in radians, starting at 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngles {
    pub start: f32,
    pub end: f32,
}

/// Convert shares (summing to 1) into consecutive slice angles
pub fn slice_angles(shares: &[f64]) -> Vec<SliceAngles> {
    let mut start = -PI / 2.0;
    shares
        .iter()
        .map(|share| {
            let end = start + 2.0 * PI * (*share as f32);
            let slice = SliceAngles { start, end };
            start = end;
            slice
        })
        .collect()
}

impl PricerApp {
    /// Render the expenses distribution donut and its legend
    pub fn render_distribution_chart(&self, ui: &mut egui::Ui, dataset: &ChartDataset, labels: &Labels) {
        let config = DonutConfig::default();
        let shares = dataset.shares();

        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), CHART_HEIGHT),
            egui::Sense::hover(),
        );
        let center = rect.center();
        let painter = ui.painter_at(rect);

        match &shares {
            Some(shares) => {
                for (index, angles) in slice_angles(shares).iter().enumerate() {
                    draw_arc(
                        &painter,
                        center,
                        config.radius,
                        config.stroke_width,
                        *angles,
                        CURRENT_THEME.palette_color(index),
                    );
                }
            }
            None => {
                // Nothing meaningful to split: empty ring with "N/A" in the middle
                painter.circle_stroke(
                    center,
                    config.radius,
                    egui::Stroke::new(config.stroke_width, CURRENT_THEME.chart.empty_ring),
                );
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    labels.get(LabelKey::NotAvailable),
                    egui::FontId::new(18.0, egui::FontFamily::Proportional),
                    colors::LABEL,
                );
            }
        }

        render_chart_legend(
            ui,
            dataset,
            labels,
            |index, _| CURRENT_THEME.palette_color(index),
            |index| shares.as_ref().and_then(|s| s.get(index).copied()),
        );
    }
}

/// Stroke an arc as short line segments (roughly 3 pixels each)
fn draw_arc(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    stroke_width: f32,
    angles: SliceAngles,
    color: egui::Color32,
) {
    let arc_length = (angles.end - angles.start).abs();
    if arc_length <= f32::EPSILON {
        return;
    }

    let num_segments = ((arc_length * radius / 3.0).ceil() as i32).clamp(2, 200);
    let angle_step = (angles.end - angles.start) / num_segments as f32;
    let stroke = egui::Stroke::new(stroke_width, color);

    let point_at = |angle: f32| egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin());

    for i in 0..num_segments {
        let angle1 = angles.start + angle_step * i as f32;
        let angle2 = angles.start + angle_step * (i + 1) as f32;
        painter.line_segment([point_at(angle1), point_at(angle2)], stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_angles_cover_full_circle() {
        let angles = slice_angles(&[0.25, 0.25, 0.5]);

        assert_eq!(angles.len(), 3);
        assert_eq!(angles[0].start, -PI / 2.0);
        assert!((angles[0].end - 0.0).abs() < 1e-6);
        assert_eq!(angles[1].start, angles[0].end);
        assert!((angles[2].end - (angles[0].start + 2.0 * PI)).abs() < 1e-5);
    }

    #[test]
    fn test_zero_share_has_empty_slice() {
        let angles = slice_angles(&[0.0, 1.0]);
        assert_eq!(angles[0].start, angles[0].end);
    }
}
