use clap::Parser;
use std::process;
use tracing::{error, info, Level};
use u_random_search::problems::Sphere;
use u_random_search::{RsConfig, RsResult, RsRunner};

/// Minimize the squaring-sum function by random search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of dimensions of the search space.
    #[arg(short, long, default_value_t = 2)]
    dimensions: usize,

    /// Lower bound of every dimension.
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    min: f64,

    /// Upper bound of every dimension.
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    max: f64,

    /// Number of candidates to sample.
    #[arg(short, long, default_value_t = 100)]
    iterations: usize,

    /// Random seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop once the best cost is at or below this value.
    #[arg(short, long)]
    target: Option<f64>,

    /// Print the result as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> RsConfig {
        let mut config = RsConfig::default().with_max_iterations(self.iterations);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(target) = self.target {
            config = config.with_target_cost(target);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let problem = Sphere::new(cli.dimensions, cli.min, cli.max).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    info!(
        "Searching {} dimension(s) in [{}, {}] for up to {} iteration(s)",
        cli.dimensions, cli.min, cli.max, cli.iterations
    );

    let result = RsRunner::run(&problem, &cli.config()).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    } else {
        print_report(&result);
    }
}

fn print_report(result: &RsResult) {
    for (i, cost) in result.cost_history.iter().enumerate() {
        println!(" > iteration={}, best={}", i + 1, cost);
    }
    let vector = result
        .best
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Done. Best Solution: c={}, v=[{}]", result.best_cost, vector);
}
