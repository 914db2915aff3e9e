use clap::{command, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trust_modal::{
    config::{self, EngineConfig},
    eval::{FuzzyEvaluator, FuzzyFrame, StructuredEvaluator},
    model::{KripkeModel, ModelDefinition},
    parse_with_config,
    tokenizer::token::tokenize,
    Error,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to engine config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a formula
    Tokens { formula: String },
    /// Print the syntax tree of a formula
    Parse { formula: String },
    /// Evaluate a formula at an agent of a fuzzy trust frame
    Fuzzy {
        /// Fuzzy frame JSON file
        #[arg(short, long)]
        frame: PathBuf,
        #[arg(short, long)]
        agent: String,
        formula: String,
    },
    /// Evaluate a formula at a world of a Kripke model
    Kripke {
        /// Kripke model JSON file
        #[arg(short, long)]
        model: PathBuf,
        #[arg(short, long, default_value_t = 0)]
        world: usize,
        formula: String,
    },
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    debug!("config: {:?}", config);

    match &cli.command {
        Command::Tokens { formula } => {
            for token in tokenize(formula)? {
                println!("{} ({})", token.token, token.span);
            }
        }
        Command::Parse { formula } => {
            let expression = parse_with_config(formula, &config)?;
            println!("{:#?}", expression);
            println!("{}", expression);
            println!("depth: {}", expression.depth());
        }
        Command::Fuzzy {
            frame,
            agent,
            formula,
        } => {
            let frame = FuzzyFrame::from_file(frame)?;
            info!("frame loaded.");
            let expression = parse_with_config(formula, &config)?;
            let degree = FuzzyEvaluator::with_config(&frame, &config).evaluate(&expression, agent)?;
            println!("{}", degree);
        }
        Command::Kripke {
            model,
            world,
            formula,
        } => {
            let definition: ModelDefinition = config::from_file(model)?;
            let model = KripkeModel::try_from(definition)?;
            info!("model loaded.");
            let expression = parse_with_config(formula, &config)?;
            let valuation =
                StructuredEvaluator::with_config(&model, &config).evaluate(&expression, *world)?;
            println!("{}", valuation);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
