//! # Styling Module
//!
//! Global egui style setup and the painting helpers shared by the panels.
//!
//! ## Key Functions:
//! - `setup_pricer_style()` - Configure global egui styling
//! - `draw_gradient_background()` - Paint the pink/purple/cyan window background
//! - `card_frame()` - Translucent card frame used by every panel
//! - `card_title()` - Card heading text

use eframe::egui;

use super::theme::{colors, CURRENT_THEME};

/// Setup the pricer's UI styling for the entire application
pub fn setup_pricer_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Let the painted gradient show through
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = egui::Color32::TRANSPARENT;
        style.visuals.button_frame = true;

        // In egui 0.28 text edits and drag values read their background from extreme_bg_color
        style.visuals.extreme_bg_color = CURRENT_THEME.interactive.input_background;
        style.visuals.widgets.inactive.bg_fill = CURRENT_THEME.interactive.input_background;
        style.visuals.widgets.inactive.weak_bg_fill = CURRENT_THEME.interactive.input_background;
        style.visuals.widgets.inactive.bg_stroke =
            egui::Stroke::new(1.0, CURRENT_THEME.interactive.input_border);
        style.visuals.override_text_color = Some(colors::VALUE);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(26.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

        style
    });
}

/// Paint a vertical three-stop gradient over `rect`
pub fn draw_gradient_background(ui: &egui::Ui, rect: egui::Rect) {
    let layout = &CURRENT_THEME.layout;
    let mid_y = rect.center().y;

    let mut mesh = egui::Mesh::default();
    let stops = [
        (rect.top(), layout.gradient_top),
        (mid_y, layout.gradient_mid),
        (rect.bottom(), layout.gradient_bottom),
    ];
    for (y, color) in stops {
        mesh.colored_vertex(egui::pos2(rect.left(), y), color);
        mesh.colored_vertex(egui::pos2(rect.right(), y), color);
    }
    // Two quads: top half (0,1,2,3) and bottom half (2,3,4,5)
    for base in [0u32, 2] {
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 2, base + 3);
    }

    ui.painter().add(egui::Shape::mesh(mesh));
}

/// Translucent card frame with a soft shadow
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(2.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.card_shadow,
        })
}

/// Card heading in the label color
pub fn card_title(text: &str) -> egui::RichText {
    egui::RichText::new(text)
        .font(egui::FontId::new(20.0, egui::FontFamily::Proportional))
        .strong()
        .color(colors::LABEL)
}
