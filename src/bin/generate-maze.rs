//! CLI for maze generation only

use clap::Parser;
use perfect_maze::{maze_generator::MazeGenerator, Grid};

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated maze height
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Generated maze width
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = Grid::new(args.width, args.height)?;
    MazeGenerator::new(args.seed).generate(&mut grid);
    print!("{}", grid);
    Ok(())
}
