//! # Theme Configuration
//!
//! Centralized colors for the pricer window. All visual styling should use
//! these constants so the look stays consistent across panels and charts.

use eframe::egui::Color32;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Interactive element colors (buttons, inputs)
    pub interactive: InteractiveColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Chart colors
    pub chart: ChartColors,
}

/// Colors for interactive elements
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Selected language button / primary action background
    pub active_background: Color32,
    /// Unselected language button background
    pub inactive_background: Color32,
    /// Numeric input background
    pub input_background: Color32,
    pub input_border: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Three-stop background gradient, top to bottom
    pub gradient_top: Color32,
    pub gradient_mid: Color32,
    pub gradient_bottom: Color32,
    /// Translucent card background
    pub card_background: Color32,
    pub card_shadow: Color32,
    /// Background of a single result tile
    pub tile_background: Color32,
    /// Title banner background
    pub banner_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Labels and card titles
    pub label: Color32,
    /// Result values
    pub value: Color32,
    /// Values that went negative
    pub negative: Color32,
    pub white: Color32,
    pub error: Color32,
    pub success: Color32,
}

/// Chart colors
#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Fill for bar charts
    pub bar: Color32,
    /// Fill for bars with a negative value
    pub negative_bar: Color32,
    /// Slice colors for the distribution chart, cycled by index
    pub palette: [Color32; 4],
    /// Color of the empty donut ring when no distribution can be drawn
    pub empty_ring: Color32,
}

/// The current active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        active_background: Color32::from_rgb(59, 130, 246),
        inactive_background: Color32::from_rgb(255, 255, 255),
        input_background: Color32::from_rgb(219, 234, 254),
        input_border: Color32::from_rgb(147, 197, 253),
    },
    layout: LayoutColors {
        // pink -> purple -> cyan
        gradient_top: Color32::from_rgb(249, 168, 212),
        gradient_mid: Color32::from_rgb(216, 180, 254),
        gradient_bottom: Color32::from_rgb(103, 232, 249),
        card_background: Color32::from_rgba_premultiplied(204, 204, 204, 204),
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        tile_background: Color32::from_rgb(219, 234, 254),
        banner_background: Color32::from_rgba_premultiplied(41, 91, 172, 179),
    },
    typography: TypographyColors {
        label: Color32::from_rgb(37, 99, 235),
        value: Color32::from_rgb(30, 64, 175),
        negative: Color32::from_rgb(185, 28, 28),
        white: Color32::WHITE,
        error: Color32::from_rgb(220, 20, 60),
        success: Color32::from_rgb(34, 139, 34),
    },
    chart: ChartColors {
        bar: Color32::from_rgb(59, 130, 246),
        negative_bar: Color32::from_rgb(239, 68, 68),
        palette: [
            Color32::from_rgb(0, 255, 255),   // Cyan
            Color32::from_rgb(255, 0, 255),   // Magenta
            Color32::from_rgb(255, 255, 0),   // Yellow
            Color32::from_rgb(255, 105, 180), // Hot pink
        ],
        empty_ring: Color32::from_rgb(200, 200, 200),
    },
};

impl Theme {
    /// Slice color for the entry at `index`
    pub fn palette_color(&self, index: usize) -> Color32 {
        self.chart.palette[index % self.chart.palette.len()]
    }

    /// Bar color for a value, red when it is negative
    pub fn bar_color(&self, value: f64) -> Color32 {
        if value < 0.0 {
            self.chart.negative_bar
        } else {
            self.chart.bar
        }
    }

    /// Text color for a result value, red when it is negative
    pub fn value_color(&self, value: f64) -> Color32 {
        if value < 0.0 {
            self.typography.negative
        } else {
            self.typography.value
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const LABEL: Color32 = CURRENT_THEME.typography.label;
    pub const VALUE: Color32 = CURRENT_THEME.typography.value;
    pub const TEXT_WHITE: Color32 = CURRENT_THEME.typography.white;
    pub const ERROR: Color32 = CURRENT_THEME.typography.error;
    pub const SUCCESS: Color32 = CURRENT_THEME.typography.success;

    pub const ACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.active_background;
    pub const INACTIVE_BACKGROUND: Color32 = CURRENT_THEME.interactive.inactive_background;

    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const TILE_BACKGROUND: Color32 = CURRENT_THEME.layout.tile_background;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(CURRENT_THEME.palette_color(0), CURRENT_THEME.palette_color(4));
        assert_ne!(CURRENT_THEME.palette_color(0), CURRENT_THEME.palette_color(1));
    }

    #[test]
    fn test_negative_values_use_warning_colors() {
        assert_eq!(CURRENT_THEME.bar_color(-1.0), CURRENT_THEME.chart.negative_bar);
        assert_eq!(CURRENT_THEME.bar_color(0.0), CURRENT_THEME.chart.bar);
        assert_eq!(CURRENT_THEME.value_color(-5_000.0), CURRENT_THEME.typography.negative);
    }
}
