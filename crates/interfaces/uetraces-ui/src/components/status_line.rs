use crate::theme::*;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use uetraces_app_core::viewmodel::{MainWindowVm, StatusTone};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &MainWindowVm) {
    let color = match vm.status_tone {
        StatusTone::Neutral => COL_TEXT_DIM,
        StatusTone::Success => COL_SUCCESS,
        StatusTone::Error => COL_DANGER,
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        min_size: taffy::Size {
            width: percent(1.),
            height: length(36.0),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(egui::RichText::new(&vm.status_text).color(color));
        },
    );
}
