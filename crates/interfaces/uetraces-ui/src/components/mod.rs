pub mod channel_grid;
pub mod path_row;
pub mod status_line;
