use crate::icon::IconImage;
use anyhow::Result;
use winit::window::{Icon, Window};

pub trait WindowSystem {
    fn set_window_icon(&self, images: &[IconImage<'_>]) -> Result<()>;
}

/// winit keeps a single icon per window, so the largest candidate wins. An
/// empty slice restores the platform default. On macOS this has no effect.
impl WindowSystem for Window {
    fn set_window_icon(&self, images: &[IconImage<'_>]) -> Result<()> {
        let icon = match largest(images) {
            Some(image) => Some(Icon::from_rgba(
                image.pixels.to_vec(),
                image.width,
                image.height,
            )?),
            None => None,
        };

        Window::set_window_icon(self, icon);

        Ok(())
    }
}

fn largest<'a, 'b>(images: &'b [IconImage<'a>]) -> Option<&'b IconImage<'a>> {
    images.iter().max_by_key(|image| image.area())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_candidate() {
        let small = [0u8; 16 * 16 * 4];
        let big = [0u8; 32 * 32 * 4];
        let images = [
            IconImage {
                width: 16,
                height: 16,
                pixels: &small,
            },
            IconImage {
                width: 32,
                height: 32,
                pixels: &big,
            },
        ];

        let chosen = largest(&images).unwrap();

        assert_eq!((chosen.width, chosen.height), (32, 32));
    }

    #[test]
    fn no_candidate_means_default_icon() {
        assert!(largest(&[]).is_none());
    }
}
