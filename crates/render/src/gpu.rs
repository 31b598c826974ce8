//! GPU texture handle for a surface raster.

use tracing::trace;

use crate::raster::RasterTarget;

/// A wgpu texture mirroring a [`RasterTarget`], re-uploaded only when the
/// raster is marked dirty.
pub struct SurfaceTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl SurfaceTexture {
    /// Allocate a GPU texture matching the raster's dimensions.
    pub fn new(device: &wgpu::Device, raster: &RasterTarget, label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: raster.width(),
                height: raster.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    /// The underlying texture.
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    /// A default view of the texture, for binding by the host renderer.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Upload the raster if it changed since the last upload, clearing its
    /// dirty flag. Returns true if an upload happened.
    pub fn upload_if_dirty(&self, queue: &wgpu::Queue, raster: &mut RasterTarget) -> bool {
        if !raster.needs_upload {
            return false;
        }
        self.upload(queue, raster.width(), raster.height(), raster.pixels());
        raster.needs_upload = false;
        trace!("surface texture re-uploaded");
        true
    }

    fn upload(&self, queue: &wgpu::Queue, width: u32, height: u32, pixels: &[u8]) {
        let row_bytes = width as usize * 4;
        let alignment = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT as usize;
        let padded_row_bytes = row_bytes.div_ceil(alignment) * alignment;

        let extent = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let copy = wgpu::ImageCopyTexture {
            texture: &self.texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        };

        if padded_row_bytes == row_bytes {
            queue.write_texture(
                copy,
                pixels,
                wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(row_bytes as u32),
                    rows_per_image: Some(height),
                },
                extent,
            );
        } else {
            // Row pitch must satisfy COPY_BYTES_PER_ROW_ALIGNMENT.
            let mut padded = vec![0u8; padded_row_bytes * height as usize];
            for row in 0..height as usize {
                let src = row * row_bytes;
                let dst = row * padded_row_bytes;
                padded[dst..dst + row_bytes].copy_from_slice(&pixels[src..src + row_bytes]);
            }
            queue.write_texture(
                copy,
                &padded,
                wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row_bytes as u32),
                    rows_per_image: Some(height),
                },
                extent,
            );
        }
    }
}
