use std::sync::mpsc::{channel, Receiver};

use bytemuck::Zeroable;
use image::{ImageBuffer, Luma, Rgb32FImage};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::thread_rng;
use rayon::prelude::{ParallelBridge, ParallelIterator};
use raytracer::renderer::{RayResult, Renderer, RendererCreateInfo};
use raytracer::scene::Scene;

use crate::progress::Progress;

pub struct TileMsg {
    pub tile_x: u32,
    pub tile_y: u32,
    pub data: Vec<RayResult>,
}

impl TileMsg {
    fn extent(&self, tile_size: u32, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let x = self.tile_x * tile_size;
        let y = self.tile_y * tile_size;
        let tile_width = (x + tile_size).min(width) - x;
        let tile_height = (y + tile_size).min(height) - y;
        (x, y, tile_width, tile_height)
    }
}

pub struct TileRenderer {
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
    pub max_depth: u32,
    pub scene: Scene,
}

pub struct OutputBuffers {
    pub color: Rgb32FImage,
    pub depth: ImageBuffer<Luma<f32>, Vec<f32>>,
}

impl TileRenderer {
    /// Render the scene tile by tile on the global worker pool. Workers own
    /// their tile buffers and post finished tiles over a channel; a single
    /// task folds them into the shared output buffers.
    pub fn run(self) -> anyhow::Result<OutputBuffers> {
        let width = self.width;
        let height = self.height;
        let tile_size = self.tile_size;

        let renderer = Renderer::new(RendererCreateInfo {
            width,
            height,
            max_depth: self.max_depth,
            scene: self.scene,
        })?;

        let mut output_buffers = OutputBuffers {
            color: ImageBuffer::new(width, height),
            depth: ImageBuffer::new(width, height),
        };

        let mut write_tile = |msg: &TileMsg| {
            let (x, y, tile_width, tile_height) = msg.extent(tile_size, width, height);
            for i in 0..tile_width {
                for j in 0..tile_height {
                    let RayResult { color, z } = msg.data[(i + tile_width * j) as usize];
                    *output_buffers.color.get_pixel_mut(x + i, y + j) = color;
                    *output_buffers.depth.get_pixel_mut(x + i, y + j) = Luma([z]);
                }
            }
        };

        let tile_count_x = (width as f32 / tile_size as f32).ceil() as u32;
        let tile_count_y = (height as f32 / tile_size as f32).ceil() as u32;

        let progress = Progress::new((tile_count_x * tile_count_y) as usize);
        let mut generation_result = Ok(());

        enum Message {
            Tile(TileMsg),
            Stop,
        }

        rayon::scope(|s| {
            let (tx, rx) = channel();

            log::info!("Generating image...");
            s.spawn(|_| {
                let rx: Receiver<Message> = rx; // Move the receiver, nothing else
                for msg in rx.iter() {
                    match msg {
                        Message::Tile(tile_msg) => {
                            write_tile(&tile_msg);
                            progress.print();
                        }
                        Message::Stop => break,
                    }
                }
                progress.print();
            });

            let mut tiles = (0..tile_count_x)
                .cartesian_product(0..tile_count_y)
                .collect::<Vec<_>>();
            tiles.shuffle(&mut thread_rng());

            generation_result = tiles.into_iter().par_bridge().try_for_each_with(
                tx.clone(),
                |tx, (tile_x, tile_y)| -> anyhow::Result<()> {
                    let x_range = (tile_x * tile_size)..((tile_x + 1) * tile_size).min(width);
                    let y_range = (tile_y * tile_size)..((tile_y + 1) * tile_size).min(height);
                    let tile_width = x_range.len();

                    let mut data = Vec::new();
                    data.resize(x_range.len() * y_range.len(), RayResult::zeroed());

                    for (i, x) in x_range.enumerate() {
                        for (j, y) in y_range.clone().enumerate() {
                            // Pixels in the image crate go left to right, top to bottom
                            let vx = 2. * (x as f32 / (width - 1) as f32) - 1.;
                            let vy = 1. - 2. * (y as f32 / (height - 1) as f32);
                            data[j * tile_width + i] = renderer.process_pixel(vx, vy);
                        }
                    }

                    log::debug!("Tile {tile_x} {tile_y} done");
                    tx.send(Message::Tile(TileMsg {
                        tile_x,
                        tile_y,
                        data,
                    }))?;
                    progress.inc();
                    Ok(())
                },
            );

            tx.send(Message::Stop).unwrap();
        });

        match &generation_result {
            Ok(_) => log::info!("Image fully generated"),
            Err(err) => log::error!("Image generation interrupted: {}", err),
        };
        generation_result?;

        Ok(output_buffers)
    }
}
