use anyhow::Result;
use raytracer::utils::{counter, timer::timed_scope_log};

use crate::{
    output::{FileOutput, FinalOutput},
    tile_renderer::TileRenderer,
    Args,
};

pub struct Cli {
    pub final_outputs: Vec<Box<dyn FinalOutput>>,
    pub renderer: TileRenderer,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        anyhow::ensure!(args.tile_size > 0, "tile size must be positive");

        if args.no_threads {
            log::warn!("Working on only one thread");
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build_global()?;
        }

        Ok(Self {
            final_outputs: vec![Box::new(FileOutput::new(args.outdir))],
            renderer: TileRenderer {
                width: args.dimensions.width,
                height: args.dimensions.height,
                tile_size: args.tile_size,
                max_depth: args.max_depth,
                scene: args.scene.build()?,
            },
        })
    }

    pub fn run(self) -> Result<()> {
        let Cli {
            final_outputs,
            renderer,
        } = self;

        let output_buffers = timed_scope_log("Run tile renderer", || renderer.run()).res?;

        for final_output in final_outputs {
            final_output.commit(&output_buffers)?;
        }

        log::info!("Done");
        counter::report_counters();
        Ok(())
    }
}
