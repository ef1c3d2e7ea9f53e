use uetraces_config::APP_TITLE;

pub fn show_already_running() {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(APP_TITLE)
        .set_description(format!("{APP_TITLE} is already running."))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
