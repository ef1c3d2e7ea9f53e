use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct PathRowResponse {
    /// New field contents when the user typed into it.
    pub edited: Option<String>,
    pub browse_clicked: bool,
}

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, exe_path: &str, enabled: bool) -> PathRowResponse {
    let mut resp = PathRowResponse {
        edited: None,
        browse_clicked: false,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "Packaged build .exe:"));

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(10.0),
            align_items: Some(taffy::AlignItems::Center),
            ..Default::default()
        })
        .add(|tui| {
            let mut value = exe_path.to_string();
            let field = tui.ui_add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(r"C:\Builds\Windows\MyGame.exe")
                    .desired_width(560.0)
                    .font(egui::FontId::monospace(12.0)),
            );
            if field.changed() {
                resp.edited = Some(value);
            }

            if tui
                .ui(|ui| {
                    cmd_button(
                        ui,
                        "Browse...",
                        ButtonKind::Outline,
                        egui::vec2(150.0, 24.0),
                        enabled,
                    )
                })
                .clicked()
            {
                resp.browse_clicked = true;
            }
        });
    });

    resp
}
