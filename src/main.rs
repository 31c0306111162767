//! CLI for maze generation and solving

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use perfect_maze::{maze_generator::MazeGenerator, render, solve, Grid};

/// Generate a perfect maze and show the way from the top-left to the
/// bottom-right corner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells. Asked for interactively if omitted.
    #[arg(long)]
    width: Option<usize>,

    /// Maze height in cells. Asked for interactively if omitted.
    #[arg(long)]
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the maze, do not solve it
    #[arg(long)]
    no_solve: bool,
}

/// Prompt on stdout and read a positive integer from stdin
fn ask(prompt: &str) -> anyhow::Result<usize> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Could not read from stdin")?;
    let value: usize = line
        .trim()
        .parse()
        .with_context(|| format!("Expected a positive integer, got `{}`", line.trim()))?;
    if value == 0 {
        bail!("Expected a positive integer, got 0");
    }
    Ok(value)
}

/// Build maze, print it and its solution
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let width = match args.width {
        Some(width) => width,
        None => ask("Enter maze width: ")?,
    };
    let height = match args.height {
        Some(height) => height,
        None => ask("Enter maze height: ")?,
    };
    info!("building {}x{} maze, seed {:?}", width, height, args.seed);

    let mut grid = Grid::new(width, height)?;
    MazeGenerator::new(args.seed).generate(&mut grid);
    print!("{}", render(&grid));

    if !args.no_solve {
        let solution = solve(&mut grid)?;
        println!("\nSolution:");
        print!("{}", render(&grid));
        solution.print_report();
    }
    Ok(())
}
