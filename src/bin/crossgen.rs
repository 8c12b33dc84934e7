extern crate clap;

use anyhow::{anyhow, Context, Result};
use clap::{App, Arg, ArgMatches};
use crossgen::{
    vocabulary, Checkpoint, Generator, GeneratorConfig, ParallelGenerator, SeedPlacement,
    SingleThreadedGenerator,
};
use std::{fs::File, str::FromStr};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = App::new("crossgen")
        .about("Generates dense crossword layouts from a word list")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .value_name("FILE")
                .help("Word list, one word per line or a JSON array/object")
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .value_name("WIDTH")
                .default_value("13")
                .help("Grid width"),
        )
        .arg(
            Arg::with_name("height")
                .short("h")
                .long("height")
                .value_name("HEIGHT")
                .default_value("13")
                .help("Grid height"),
        )
        .arg(
            Arg::with_name("trials")
                .short("n")
                .long("trials")
                .value_name("COUNT")
                .default_value("100000")
                .help("Number of boards to build"),
        )
        .arg(
            Arg::with_name("checkpoint")
                .short("c")
                .long("checkpoint")
                .value_name("COUNT")
                .default_value("100")
                .help("Report the best board every COUNT trials"),
        )
        .arg(
            Arg::with_name("place")
                .short("p")
                .long("place")
                .value_name("WORD:ROW:COL:DIR")
                .multiple(true)
                .number_of_values(1)
                .help("Word to pin on every board before the search, e.g. стаж:6:4:right"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("Base seed for reproducible runs"),
        )
        .arg(
            Arg::with_name("threads")
                .short("t")
                .long("threads")
                .value_name("COUNT")
                .default_value("1")
                .help("Worker threads; more than one runs trials in parallel"),
        )
        .arg(
            Arg::with_name("profile")
                .long("profile")
                .takes_value(false)
                .help("Write a flamegraph to flamegraph.svg while running"),
        )
        .get_matches();

    let config = config_from(&matches)?;
    let input = matches.value_of("input").context("input not included")?;
    let words = vocabulary::load(input).with_context(|| format!("failed to load {}", input))?;

    if matches.is_present("profile") {
        let guard = pprof::ProfilerGuard::new(100).context("failed to start profiler")?;
        std::thread::spawn(move || loop {
            if let Ok(report) = guard.report().build() {
                match File::create("flamegraph.svg") {
                    Ok(file) => {
                        if let Err(err) = report.flamegraph(file) {
                            warn!("failed to write flamegraph: {}", err);
                        }
                    }
                    Err(err) => warn!("failed to create flamegraph.svg: {}", err),
                }
            }
            std::thread::sleep(std::time::Duration::from_secs(5))
        });
    }

    info!(
        width = config.width,
        height = config.height,
        trials = config.trials,
        threads = config.threads,
        "starting search"
    );

    let best = if config.threads > 1 {
        ParallelGenerator::new(&words, &config).generate(&mut report)
    } else {
        SingleThreadedGenerator::new(&words, &config).generate(&mut report)
    }
    .context("failed to generate crossword")?;

    print!("{}", best.crossword);
    println!();
    println!("Score: {}", best.score);
    println!("Seed: {}", best.seed());

    Ok(())
}

fn report(checkpoint: &Checkpoint) {
    println!("Current best (of {})", checkpoint.completed);
    println!();
    print!("{}", checkpoint.best.crossword);
    println!();
    println!("Score: {}", checkpoint.best.score);
    println!("Seed: {}", checkpoint.best.seed());
}

fn config_from(matches: &ArgMatches) -> Result<GeneratorConfig> {
    let placements = match matches.values_of("place") {
        Some(values) => values
            .map(|value| {
                SeedPlacement::from_str(value).with_context(|| format!("bad --place {}", value))
            })
            .collect::<Result<Vec<_>>>()?,
        None => vec![],
    };

    Ok(GeneratorConfig {
        width: parse_arg(matches, "width")?,
        height: parse_arg(matches, "height")?,
        trials: parse_arg(matches, "trials")?,
        checkpoint_interval: parse_arg(matches, "checkpoint")?,
        placements,
        seed: match matches.value_of("seed") {
            Some(seed) => Some(seed.parse::<u64>().with_context(|| format!("bad --seed {}", seed))?),
            None => None,
        },
        threads: parse_arg(matches, "threads")?,
    })
}

fn parse_arg<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = matches
        .value_of(name)
        .ok_or_else(|| anyhow!("{} not included", name))?;
    value
        .parse()
        .with_context(|| format!("failed to parse --{} {}", name, value))
}
