use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};
use uetraces_app_core::viewmodel::MainWindowVm;
use uetraces_config::CHANNEL_GRID_COLUMNS;
use uetraces_core::ChannelId;

const COLUMN_WIDTH: f32 = 220.0;

/// Draws one checkbox per channel, filling rows left to right in registry
/// order. Returns the channels the user toggled this frame.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &MainWindowVm) -> Vec<(ChannelId, bool)> {
    let mut toggled = Vec::new();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, &vm.channels_heading));

        tui.ui(|ui| {
            egui::Grid::new("trace_channels")
                .num_columns(CHANNEL_GRID_COLUMNS)
                .min_col_width(COLUMN_WIDTH)
                .spacing(egui::vec2(10.0, 6.0))
                .show(ui, |ui| {
                    for (ix, row) in vm.channels.iter().enumerate() {
                        let mut checked = row.checked;
                        let changed = ui
                            .push_id(row.id.0, |ui| ui.checkbox(&mut checked, row.label))
                            .inner
                            .changed();
                        if changed {
                            toggled.push((row.id, checked));
                        }

                        if (ix + 1) % CHANNEL_GRID_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    });

    toggled
}
