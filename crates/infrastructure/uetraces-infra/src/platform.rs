use std::path::PathBuf;

/// Directory containing the running launcher executable, or `.` when it cannot
/// be determined.
pub fn launcher_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
