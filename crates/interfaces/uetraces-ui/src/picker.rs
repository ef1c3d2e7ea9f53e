use std::path::PathBuf;

use uetraces_app_core::FilePicker;

/// Native "open file" dialog restricted to existing executables, modal to the
/// main window.
pub struct NativeFilePicker<'a> {
    owner: &'a eframe::Frame,
}

impl<'a> NativeFilePicker<'a> {
    pub fn owned_by(owner: &'a eframe::Frame) -> Self {
        Self { owner }
    }
}

impl FilePicker for NativeFilePicker<'_> {
    fn select_executable(&self, current_path: &str) -> Option<String> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select packaged build")
            .set_parent(self.owner)
            .add_filter("Windows executable (*.exe)", &["exe"])
            .add_filter("All files (*.*)", &["*"]);

        let current = current_path.trim();
        if !current.is_empty() {
            if let Some(parent) = PathBuf::from(current).parent() {
                if parent.is_dir() {
                    dialog = dialog.set_directory(parent);
                }
            }
        }

        dialog
            .pick_file()
            .map(|path| path.to_string_lossy().to_string())
    }
}
