use std::error::Error;

use clap::{Parser, ValueEnum};
use rand::Rng;
use tracing::info;

use logic_nn::{
    logging, logic_dataset, train_loop, Lcg, NetworkError, Report, TrainConfig, Trainer,
};

/// Trains a two-layer perceptron on XOR, XNOR, OR, AND, NOR and NAND at once
/// and prints what it learned.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with training settings; flags below override it
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
    #[arg(short, long, value_name = "INT")]
    iterations: Option<usize>,
    #[arg(short, long, value_name = "FLOAT")]
    learning_rate: Option<f64>,
    /// Number of hidden neurons
    #[arg(long, value_name = "INT")]
    hidden: Option<usize>,
    /// Seed for the LCG initialisers; rejected with `--init thread`
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Init::Lcg)]
    init: Init,
    /// Also print the trained network as JSON
    #[arg(long)]
    json: bool,
}

/// Source of the initial weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Init {
    /// 32-bit wrapping LCG, the reference initialiser
    Lcg,
    /// Exact Park–Miller minimal standard generator
    ParkMiller,
    /// Thread-local OS-seeded RNG
    Thread,
}

/// Merges the optional config file with command-line overrides.
fn resolve_config(args: &Cli) -> Result<TrainConfig, NetworkError> {
    if args.init == Init::Thread && args.seed.is_some() {
        return Err(NetworkError::Config(
            "--seed only applies to the LCG initialisers, not --init thread".to_string(),
        ));
    }

    let mut config = match &args.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(learning_rate) = args.learning_rate {
        config.learning_rate = learning_rate;
    }
    if let Some(hidden) = args.hidden {
        config.hidden_count = hidden;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::install_logger()?;
    let args = Cli::parse();
    let config = resolve_config(&args)?;

    let data = logic_dataset();
    config.check_dataset(&data)?;

    let (n_in, n_hid, n_out) = (config.input_count, config.hidden_count, config.output_count);
    let mut trainer = match args.init {
        Init::Lcg | Init::ParkMiller => {
            info!(seed = config.seed, init = ?args.init, "initialising weights from LCG");
            let mut lcg = if args.init == Init::Lcg {
                Lcg::with_seed(config.seed)
            } else {
                Lcg::park_miller(config.seed)
            };
            Trainer::new(n_in, n_hid, n_out, || lcg.next_float())
        }
        Init::Thread => {
            info!("initialising weights from thread RNG");
            let mut rng = rand::thread_rng();
            Trainer::new(n_in, n_hid, n_out, || rng.gen::<f64>())
        }
    };

    let stats = train_loop(&mut trainer, &data, &config);

    print!(
        "{}",
        Report {
            network: trainer.network(),
            data: &data,
            iterations: stats.iterations,
        }
    );
    if args.json {
        println!("{}", serde_json::to_string_pretty(trainer.network())?);
    }
    Ok(())
}
