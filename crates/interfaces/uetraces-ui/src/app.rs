use crate::components::{channel_grid, path_row, status_line};
use crate::utils::{cmd_button, ButtonKind};
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use uetraces_app_core::{viewmodel, AppCommand, FilePicker, Phase, TracesRecorderApplication};

use crate::picker::NativeFilePicker;

/// What the user asked for during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UiAction {
    Command(AppCommand),
    Browse,
}

/// Runs the frame's actions in order. Browsing uses `picker`, which the caller
/// ties to the main window.
fn apply_actions(
    core: &mut TracesRecorderApplication,
    actions: Vec<UiAction>,
    picker: &dyn FilePicker,
) {
    for action in actions {
        match action {
            UiAction::Command(cmd) => core.dispatch(cmd),
            UiAction::Browse => core.browse(picker),
        }
    }
}

pub struct TracesRecorderUiApp {
    core: TracesRecorderApplication,
}

impl TracesRecorderUiApp {
    pub fn new(core: TracesRecorderApplication) -> Self {
        Self { core }
    }
}

impl eframe::App for TracesRecorderUiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && self.core.state.phase != Phase::Closing
        {
            self.core.dispatch(AppCommand::Close);
        }

        ctx.style_mut(|style| {
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let vm = viewmodel::main_window_vm(&self.core.state);
        let enabled = !self.core.is_busy();
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    padding: length(8.0),
                    gap: length(12.0),
                    ..Default::default()
                })
                .show(|tui| {
                    let resp = path_row::draw(&mut *tui, &self.core.state.exe_path, enabled);
                    if let Some(path) = resp.edited {
                        actions.push(UiAction::Command(AppCommand::SetExecutablePath(path)));
                    }
                    if resp.browse_clicked {
                        actions.push(UiAction::Browse);
                    }

                    for (id, checked) in channel_grid::draw(&mut *tui, &vm) {
                        actions.push(UiAction::Command(AppCommand::SetChannel {
                            id,
                            enabled: checked,
                        }));
                    }

                    if tui
                        .ui(|ui| {
                            cmd_button(
                                ui,
                                "Launch with trace",
                                ButtonKind::Primary,
                                egui::vec2(200.0, 32.0),
                                enabled,
                            )
                        })
                        .clicked()
                    {
                        actions.push(UiAction::Command(AppCommand::Launch));
                    }

                    status_line::draw(&mut *tui, &vm);
                });
        });

        // Handled after drawing so the blocking file dialog never runs mid-frame.
        if !actions.is_empty() {
            apply_actions(&mut self.core, actions, &NativeFilePicker::owned_by(frame));
        }
    }
}
