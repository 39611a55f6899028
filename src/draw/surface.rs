//! Raster surface the editor renders into.

use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors raised while creating or exporting the raster surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to borrow surface pixels: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("failed to write PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Owned ARGB32 image surface sized to the host viewport.
#[derive(Debug)]
pub struct Surface {
    inner: cairo::ImageSurface,
}

impl Surface {
    /// Allocates a surface; zero or negative sizes are rejected.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }
        let inner = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { inner })
    }

    pub fn width(&self) -> i32 {
        self.inner.width()
    }

    pub fn height(&self) -> i32 {
        self.inner.height()
    }

    /// Underlying Cairo surface, handed to hosts for external capture.
    pub fn inner(&self) -> &cairo::ImageSurface {
        &self.inner
    }

    /// Creates a drawing context targeting this surface.
    pub fn context(&self) -> Result<cairo::Context, SurfaceError> {
        Ok(cairo::Context::new(&self.inner)?)
    }

    /// Reads one pixel as `[b, g, r, a]` (Cairo's native premultiplied order
    /// on little-endian hosts).
    ///
    /// Returns `None` when the coordinates are outside the surface or the
    /// pixel data is still shared with a live context.
    pub fn sample_pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        self.inner.flush();
        let stride = self.inner.stride() as usize;
        let data = match self.inner.data() {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Cannot sample surface pixel: {}", err);
                return None;
            }
        };
        let offset = y as usize * stride + x as usize * 4;
        let pixel = data.get(offset..offset + 4)?;
        Some([pixel[0], pixel[1], pixel[2], pixel[3]])
    }

    /// Encodes the surface as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        let mut file = File::create(path)?;
        self.inner.write_to_png(&mut file)?;
        log::info!(
            "Wrote {}x{} surface to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_sizes() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(SurfaceError::InvalidSize { .. })
        ));
        assert!(Surface::new(10, -1).is_err());
    }

    #[test]
    fn samples_painted_pixels() {
        let mut surface = Surface::new(4, 4).unwrap();
        {
            let ctx = surface.context().unwrap();
            ctx.set_source_rgb(1.0, 1.0, 1.0);
            ctx.paint().unwrap();
        }
        assert_eq!(surface.sample_pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(surface.sample_pixel(4, 0), None);
    }
}
