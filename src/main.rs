#![windows_subsystem = "windows"]

mod app;
mod fs;

use std::{env, path::PathBuf};

fn main() {
    env_logger::init();

    let icon_path = env::args_os().nth(1).map(PathBuf::from).or_else(fs::select_icon);

    let app = app::App::new(icon_path).unwrap();

    app.run();
}
