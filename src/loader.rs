use crate::{
    decoder::{ImageDecoder, PixelDecoder},
    icon::DecodedImage,
    window_system::WindowSystem,
};
use anyhow::Result;
use std::path::Path;

#[derive(Clone, Debug, Default)]
pub struct IconLoader<D = ImageDecoder> {
    decoder: D,
}

impl<D: PixelDecoder> IconLoader<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn load_icon<W, P>(&self, window: &W, path: P) -> bool
    where
        W: WindowSystem + ?Sized,
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        match self.try_load_icon(window, path) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to load window icon {}: {:#}", path.display(), err);
                false
            }
        }
    }

    pub fn try_load_icon<W, P>(&self, window: &W, path: P) -> Result<()>
    where
        W: WindowSystem + ?Sized,
        P: AsRef<Path>,
    {
        let image = self.decoder.decode(path.as_ref())?;

        install(window, image)
    }

    pub fn load_icon_from_memory<W>(&self, window: &W, raw: &[u8]) -> bool
    where
        W: WindowSystem + ?Sized,
    {
        match self
            .decoder
            .decode_memory(raw)
            .and_then(|image| install(window, image))
        {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to load window icon: {:#}", err);
                false
            }
        }
    }
}

// Takes the buffer by value so it is dropped here whether or not the window
// accepts it.
fn install<W, P>(window: &W, image: DecodedImage<P>) -> Result<()>
where
    W: WindowSystem + ?Sized,
    P: AsRef<[u8]>,
{
    window.set_window_icon(&[image.view()])?;

    log::debug!("Installed {}x{} window icon", image.width, image.height);

    Ok(())
}

pub fn load_icon<W, P>(window: &W, path: P) -> bool
where
    W: WindowSystem + ?Sized,
    P: AsRef<Path>,
{
    IconLoader::new(ImageDecoder).load_icon(window, path)
}
