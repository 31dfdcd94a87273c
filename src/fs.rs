use rfd::FileDialog;
use std::path::PathBuf;

pub fn select_icon() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "ico", "gif", "tga"])
        .pick_file()
}
