mod cli;
mod output;
mod progress;
mod tile_renderer;

use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cli::Cli;
use raytracer::{
    error::Error,
    scene::{
        examples::{FacingMirrorsScene, SphereRowScene},
        Scene,
    },
};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    SphereRow,
    FacingMirrors,
}

impl AvailableScene {
    pub fn build(self) -> Result<Scene, Error> {
        match self {
            AvailableScene::SphereRow => SphereRowScene.try_into(),
            AvailableScene::FacingMirrors => FacingMirrorsScene.try_into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b)) = (split_it.next(), split_it.next()) else {
            return Err(anyhow::anyhow!("Incorrect format, see help"));
        };
        let width: u32 = a.parse()?;
        let height: u32 = b.parse()?;

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}x{}", self.width, self.height))
    }
}

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(short, long, default_value = "320x240")]
    /// Image dimensions in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(long, default_value_t = 3)]
    /// Maximum number of reflection bounces
    max_depth: u32,

    #[arg(short, long, default_value = "output/")]
    /// Directory the final images are written into
    outdir: PathBuf,

    #[arg(long, default_value_t = 32)]
    /// Square tile edge, in pixels
    tile_size: u32,

    #[arg(long)]
    /// Render on a single thread
    no_threads: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}
