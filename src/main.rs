use clap::Parser;
use rand::{thread_rng, Rng, SeedableRng};

use kmaze::{
    logging,
    maze::algorithms::{DepthFirstSearch, MazeAlgorithm, Random, RndKruskals},
    ui::draw,
    Dims, MazeError,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "kmaze")]
struct Args {
    #[clap(short, long, help = "Maze height in cells")]
    rows: i32,
    #[clap(short, long, help = "Maze width in cells")]
    cols: i32,
    #[clap(short, long, help = "Seed of the maze generator")]
    seed: Option<u64>,
    #[clap(long, action, help = "Print the maze without solving it")]
    no_solve: bool,
    #[clap(short, long, action, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<(), MazeError> {
    let args = Args::parse();
    logging::init(args.verbose);

    // The core leaves dimension checks to its caller; anything smaller than
    // two cells is refused here.
    let size = Dims(args.cols, args.rows);
    if !size.all_positive() || size.product() < 2 {
        return Err(MazeError::InvalidDimensions(args.rows, args.cols));
    }

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    log::debug!("seed: {}", seed);

    let mut rng = Random::seed_from_u64(seed);
    let maze = RndKruskals::generate(size, &mut rng)?;
    println!("{}", draw::render_maze(&maze));

    if !args.no_solve {
        let solution = DepthFirstSearch::solve(&maze).ok_or(MazeError::Unsolvable)?;
        println!("Directions: {}", solution.directions());
        println!("{}", draw::render_visited(&solution));
    }

    Ok(())
}
