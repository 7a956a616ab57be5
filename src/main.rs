use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, BufRead, Write};

use uninformed_pathfinding::algorithms::{Algorithm, AlgorithmKind};
use uninformed_pathfinding::config::Config;
use uninformed_pathfinding::renderer::{NoopRenderer, Renderer, TerminalRenderer};
use uninformed_pathfinding::simulation::Simulation;

fn choose_algorithm() -> anyhow::Result<AlgorithmKind> {
    println!("Uninformed Search - choose an algorithm:");
    for (i, kind) in AlgorithmKind::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, kind.label());
    }
    print!("Enter 1-6: ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin()
        .lock()
        .read_line(&mut choice)
        .context("failed to read menu choice")?;

    match AlgorithmKind::from_menu_choice(&choice) {
        Some(kind) => Ok(kind),
        None => bail!("invalid choice {:?}, enter a number from 1 to 6", choice.trim()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    if config.all {
        let algorithms = Algorithm::all(config.depth_limit, config.max_depth)?;
        let mut simulation = Simulation::new(&config).context("failed to set up the grid")?;
        let results = simulation.run_all(&algorithms);
        Simulation::print_comparison_results(&results);
        return Ok(());
    }

    // Validate everything before any frame is drawn.
    let kind = match config.algorithm {
        Some(kind) => kind,
        None => choose_algorithm()?,
    };
    let algorithm = Algorithm::from_kind(kind, config.depth_limit, config.max_depth)?;
    let mut simulation = Simulation::new(&config).context("failed to set up the grid")?;

    let mut renderer: Box<dyn Renderer> = if config.no_visualization {
        Box::new(NoopRenderer)
    } else {
        Box::new(TerminalRenderer::new(format!("Uninformed Search - {}", algorithm.name())))
    };

    simulation.show_initial(&mut renderer);
    let result = simulation.run(algorithm, &mut renderer);

    println!();
    if result.statistics.found() {
        println!("Target reached successfully.");
    } else {
        println!("No path found - maybe walls completely block the target.");
    }
    println!("{}", result.statistics);

    Ok(())
}
