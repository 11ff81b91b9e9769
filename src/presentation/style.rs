use crate::domain::entities::ThemeMode;
use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

pub fn configure_style(ctx: &Context, theme: ThemeMode) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = [
        (TextStyle::Small, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(15.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(50.0, 26.0);

    // egui cannot query the OS theme here, so System falls back to dark.
    let mut visuals = match theme {
        ThemeMode::System | ThemeMode::Dark => Visuals::dark(),
        ThemeMode::Light => Visuals::light(),
    };

    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);
    visuals.widgets.active.rounding = Rounding::same(6.0);
    visuals.window_rounding = Rounding::same(10.0);

    if visuals.dark_mode {
        visuals.window_fill = Color32::from_gray(20);
        visuals.panel_fill = Color32::from_gray(28);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_gray(45);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_gray(60));
        visuals.selection.bg_fill = Color32::from_rgb(214, 76, 120);
        visuals.hyperlink_color = Color32::from_rgb(255, 140, 170);
    } else {
        visuals.window_fill = Color32::WHITE;
        visuals.panel_fill = Color32::from_gray(242);
        visuals.widgets.inactive.weak_bg_fill = Color32::from_gray(230);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, Color32::from_gray(200));
        visuals.selection.bg_fill = Color32::from_rgb(214, 76, 120);
    }

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}
