use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use image::{buffer::ConvertBuffer, ImageBuffer, Luma, Rgb, Rgb32FImage};
use raytracer::color;

use crate::tile_renderer::OutputBuffers;

/// Sink for a finished frame.
pub trait FinalOutput: Send {
    fn commit(&self, output_buffers: &OutputBuffers) -> Result<()>;
}

pub struct FileOutput {
    pub outdir: PathBuf,
}

impl FileOutput {
    pub fn new(outdir: PathBuf) -> Self {
        Self { outdir }
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, output_buffers: &OutputBuffers) -> Result<()> {
        std::fs::create_dir_all(&self.outdir)?;

        log::info!("Saving images...");
        write_ppm(&self.outdir.join("color.ppm"), &output_buffers.color)?;

        let color: ImageBuffer<Rgb<u8>, Vec<u8>> = output_buffers.color.convert();
        color.save(self.outdir.join("color.png"))?;

        let depth: ImageBuffer<Luma<u8>, Vec<u8>> = output_buffers.depth.convert();
        depth.save(self.outdir.join("depth.png"))?;

        Ok(())
    }
}

/// Binary P6 pixel map: a text header, then one byte per channel, rows top
/// to bottom.
pub fn write_ppm(path: &Path, image: &Rgb32FImage) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write!(file, "P6\n{} {}\n255\n", image.width(), image.height())?;
    for pixel in image.pixels() {
        file.write_all(&color::to_bytes(*pixel))?;
    }
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_ppm;
    use image::{Rgb, Rgb32FImage};
    use raytracer::{
        renderer::{Renderer, RendererCreateInfo},
        scene::Scene,
    };

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn ppm_header_and_payload_are_exact() {
        let mut image = Rgb32FImage::new(2, 1);
        *image.get_pixel_mut(0, 0) = Rgb([0.0, 0.5, 1.0]);
        *image.get_pixel_mut(1, 0) = Rgb([2.0, -1.0, 0.25]);

        let path = temp_path("raytracer_ppm_header_test.ppm");
        write_ppm(&path, &image).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..11], &b"P6\n2 1\n255\n"[..]);
        assert_eq!(bytes.len(), 11 + 6);
        assert_eq!(&bytes[11..], &[0, 127, 255, 255, 0, 63]);
    }

    /// The fixed regression image: one white sphere head-on, one light.
    /// At 3x3, only the center ray hits; its shaded value is pinned.
    #[test]
    fn golden_three_by_three_render() {
        use raytracer::{
            color::WHITE,
            material::{texture::Uniform, MaterialDescriptor, ShadedSurface},
            math::point::Point,
            shape::Sphere,
        };

        let mut scene = Scene::default();
        scene.move_to(Point::ORIGIN);
        scene.look_at(Point::new(0.0, 0.0, -1.0));
        scene.insert_light(Point::new(10.0, 10.0, 10.0));
        let surface = scene.insert_material(MaterialDescriptor {
            label: None,
            material: Box::new(ShadedSurface::new(Box::new(Uniform(WHITE)), 0.0, 0.5).unwrap()),
        });
        scene.insert_object(Sphere::new(Point::new(0.0, 0.0, -10.0), 2.0, surface).unwrap());

        let renderer = Renderer::new(RendererCreateInfo {
            width: 3,
            height: 3,
            max_depth: 3,
            scene,
        })
        .unwrap();

        let mut image = Rgb32FImage::new(3, 3);
        for y in 0..3u32 {
            for x in 0..3u32 {
                let vx = 2. * (x as f32 / 2.) - 1.;
                let vy = 1. - 2. * (y as f32 / 2.);
                *image.get_pixel_mut(x, y) = renderer.process_pixel(vx, vy).color;
            }
        }

        let path = temp_path("raytracer_ppm_golden_test.ppm");
        write_ppm(&path, &image).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let mut expected = vec![0u8; 27];
        // Center pixel: 0.5 + 0.5 * 18 / sqrt(524), truncated to bytes.
        expected[12..15].copy_from_slice(&[227, 227, 227]);

        assert_eq!(&bytes[..11], &b"P6\n3 3\n255\n"[..]);
        assert_eq!(&bytes[11..], expected.as_slice());
    }
}
