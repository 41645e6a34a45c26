//! Colors used by the widgets.
//!
//! The pager distinguishes three link states (normal, active, disabled) and a
//! boxed result counter; the timeline marker only needs a stroke color. The
//! defaults reproduce the classic blue pagination look and can be swapped
//! for a dark variant or anything parsed from hex strings.
//!
//! # Examples
//!
//! ```
//! use upwidgets::theme::{WidgetPalette, hex_to_color32};
//!
//! let palette = WidgetPalette::light();
//! assert_eq!(palette.active_background, hex_to_color32("#337ab7"));
//! ```

use egui::Color32;

/// Palette shared by the pager and the timeline marker.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetPalette {
    // Page links
    pub link_text: Color32,
    pub link_background: Color32,
    pub link_border: Color32,
    pub hover_background: Color32,

    // Current page
    pub active_text: Color32,
    pub active_background: Color32,

    // Disabled previous/next
    pub disabled_text: Color32,

    // Result counter
    pub counter_text: Color32,
    pub counter_background: Color32,

    // Timeline "now" marker
    pub today_line: Color32,
}

impl Default for WidgetPalette {
    fn default() -> Self {
        Self::light()
    }
}

impl WidgetPalette {
    /// Blue-on-white palette.
    pub fn light() -> Self {
        Self {
            link_text: hex_to_color32("#337ab7"),
            link_background: hex_to_color32("#ffffff"),
            link_border: hex_to_color32("#dddddd"),
            hover_background: hex_to_color32("#eeeeee"),
            active_text: hex_to_color32("#ffffff"),
            active_background: hex_to_color32("#337ab7"),
            disabled_text: hex_to_color32("#777777"),
            counter_text: hex_to_color32("#2a6496"),
            counter_background: hex_to_color32("#eeeeee"),
            today_line: hex_to_color32("#ff0000"),
        }
    }

    /// Same hues darkened for dark visuals.
    pub fn dark() -> Self {
        let light = Self::light();
        Self {
            link_text: adjust_brightness(light.link_text, 1.4),
            link_background: hex_to_color32("#1e1e1e"),
            link_border: hex_to_color32("#3c3c3c"),
            hover_background: hex_to_color32("#2d2d2d"),
            counter_text: adjust_brightness(light.counter_text, 1.6),
            counter_background: hex_to_color32("#2d2d2d"),
            today_line: hex_to_color32("#ff5555"),
            ..light
        }
    }

    /// Picks the light or dark palette to match egui visuals.
    pub fn for_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Converts a hex color string (e.g., "#ff0000" or "ff0000") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
