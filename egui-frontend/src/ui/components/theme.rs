//! # Theme Configuration
//!
//! Colours for the two dashboard themes and the glue that applies a
//! [`ThemeMode`] to the whole egui context.

use eframe::egui::{self, Color32};
use shared::ThemeMode;

use crate::backend::domain::chart_service::Rgba;

/// Accent and table colours for one theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color32,
    pub header_background: Color32,
    pub header_text: Color32,
    pub error_text: Color32,
    pub success_text: Color32,
}

pub const LIGHT_THEME: Theme = Theme {
    accent: Color32::from_rgb(79, 70, 229),
    header_background: Color32::from_rgb(79, 70, 229),
    header_text: Color32::WHITE,
    error_text: Color32::from_rgb(220, 38, 38),
    success_text: Color32::from_rgb(22, 163, 74),
};

pub const DARK_THEME: Theme = Theme {
    accent: Color32::from_rgb(129, 140, 248),
    header_background: Color32::from_rgb(55, 48, 163),
    header_text: Color32::WHITE,
    error_text: Color32::from_rgb(248, 113, 113),
    success_text: Color32::from_rgb(74, 222, 128),
};

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }
}

/// Switch every widget in the window to `mode`
pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let theme = Theme::for_mode(mode);
    let mut visuals = match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };
    visuals.selection.bg_fill = theme.accent;
    visuals.hyperlink_color = theme.accent;
    ctx.set_visuals(visuals);
}

/// CSS-style colour to egui
pub fn to_color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.alpha_u8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32_keeps_alpha() {
        let color = to_color32(Rgba::new(79, 70, 229, 0.6));
        assert_eq!(color.a(), 153);

        let opaque = to_color32(Rgba::opaque(79, 70, 229));
        assert_eq!(opaque, Color32::from_rgb(79, 70, 229));
    }
}
