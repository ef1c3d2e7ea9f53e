use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Outline,
}

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(COL_TEXT).strong());
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    kind: ButtonKind,
    min_size: egui::Vec2,
    enabled: bool,
) -> egui::Response {
    let (fill, text_col) = match kind {
        ButtonKind::Primary => (COL_ACCENT, COL_BG_DARK),
        ButtonKind::Outline => (Color32::TRANSPARENT, COL_ACCENT),
    };

    let text = egui::RichText::new(label).color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(min_size)
        .fill(if enabled { fill } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { COL_ACCENT } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}
