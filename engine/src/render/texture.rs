//! Checker grass texture.
//!
//! A tiny RGBA8 texture of 2x2-texel checks in two greens, sampled with
//! nearest filtering and repeat addressing so the terrain UVs tile it.

/// Width and height in texels.
pub const CHECKER_SIZE: u32 = 16;

const GRASS_LIGHT: [u8; 4] = [72, 150, 66, 255];
const GRASS_DARK: [u8; 4] = [48, 120, 44, 255];

/// Row-major RGBA8 pixels for a `size` x `size` checker.
pub fn checker_pixels(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let light = (x / 2 + y / 2) % 2 == 0;
            data.extend_from_slice(if light { &GRASS_LIGHT } else { &GRASS_DARK });
        }
    }
    data
}

pub struct CheckerTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl CheckerTexture {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let pixels = checker_pixels(CHECKER_SIZE);
        let extent = wgpu::Extent3d {
            width: CHECKER_SIZE,
            height: CHECKER_SIZE,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Checker Grass Texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(CHECKER_SIZE * 4),
                rows_per_image: Some(CHECKER_SIZE),
            },
            extent,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Checker Grass View"),
            ..Default::default()
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Checker Grass Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}
