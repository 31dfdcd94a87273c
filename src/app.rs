use alka_icon::load_icon;
use anyhow::Result;
use std::path::{Path, PathBuf};
use winit::{
    dpi::{LogicalSize, Size},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

pub struct App {
    event_loop: EventLoop<()>,
    window: Window,
}

impl App {
    pub fn new(icon_path: Option<PathBuf>) -> Result<Self> {
        let event_loop = EventLoop::new();

        let window = WindowBuilder::new()
            .with_inner_size(Size::Logical(LogicalSize::new(480.0, 240.0)))
            .with_title(format_title(None))
            .build(&event_loop)?;

        match icon_path {
            Some(path) => apply_icon(&window, &path),
            None => log::info!("No icon selected, keeping the default"),
        }

        Ok(Self { event_loop, window })
    }

    pub fn run(self) {
        let window = self.window;

        self.event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Wait;

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::DroppedFile(path) => apply_icon(&window, path),
                    _ => {}
                },
                _ => {}
            }
        });
    }
}

fn apply_icon(window: &Window, path: &Path) {
    if load_icon(window, path) {
        window.set_title(&format_title(Some(path)));
    }
}

fn format_title(icon_path: Option<&Path>) -> String {
    format!(
        "Alka Icon - {}",
        match icon_path {
            Some(icon_path) => icon_path.display().to_string(),
            None => "Default".to_owned(),
        }
    )
}
