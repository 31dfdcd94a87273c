mod decoder;
mod icon;
mod loader;
mod window_system;

pub use decoder::{ImageDecoder, PixelDecoder};
pub use icon::{rgba_len, DecodedImage, IconImage};
pub use loader::{load_icon, IconLoader};
pub use window_system::WindowSystem;
