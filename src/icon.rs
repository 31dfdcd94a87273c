use std::fmt;

pub struct DecodedImage<P> {
    pub width: u32,
    pub height: u32,
    pub pixels: P,
}

impl<P: AsRef<[u8]>> fmt::Debug for DecodedImage<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_len", &self.pixels.as_ref().len())
            .finish()
    }
}

impl<P: AsRef<[u8]>> DecodedImage<P> {
    pub fn new(width: u32, height: u32, pixels: P) -> Self {
        assert_eq!(rgba_len(width, height), pixels.as_ref().len());

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn view(&self) -> IconImage<'_> {
        IconImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.as_ref(),
        }
    }
}

// Borrowed for the duration of `set_window_icon` only.
#[derive(Clone, Copy)]
pub struct IconImage<'a> {
    pub width: u32,
    pub height: u32,
    pub pixels: &'a [u8],
}

impl fmt::Debug for IconImage<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("IconImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_len", &self.pixels.len())
            .finish()
    }
}

impl IconImage<'_> {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

pub fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_borrows_the_owned_pixels() {
        let image = DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let view = image.view();

        assert_eq!((view.width, view.height), (2, 1));
        assert_eq!(view.pixels, &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(view.area(), 2);
    }

    #[test]
    fn empty_image_is_allowed() {
        let image = DecodedImage::new(0, 0, Vec::new());

        assert_eq!(image.view().area(), 0);
    }

    #[test]
    #[should_panic]
    fn rejects_mismatched_buffer() {
        DecodedImage::new(2, 2, vec![0u8; 3]);
    }
}
