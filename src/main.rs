use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;

use consist::cli::Args;
use consist::config::Config;
use consist::cursor::Step;
use consist::error::Result;
use consist::interval::Interval;
use consist::report;
use consist::roster;
use consist::train::Train;
use consist::wagon::Wagon;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    if let Err(e) = run() {
        eprintln!("consist: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(&args)?;

    let wagons = gather_wagons(&config)?;

    let mut train = Train::new(config.train_id);

    println!("{}", report::header("TRAIN ASSEMBLY"));
    for wagon in wagons {
        train.append(wagon);
        println!("coupled: {}", wagon);
    }
    println!("{}", report::section("Assembled train"));
    println!("{}", train);

    walk_stepwise(&train);
    walk_past_snapshot(&mut train);

    println!("{}", report::header("TRAVERSAL WITH A FOR LOOP"));
    for wagon in &train {
        println!("{}", wagon);
    }

    if config.show_interval {
        walk_interval()?;
    }

    Ok(())
}

/// Collect wagons from the roster file, the command line, or the demo set
fn gather_wagons(config: &Config) -> Result<Vec<Wagon>> {
    if config.use_demo_wagons() {
        return Ok(demo_wagons());
    }

    let mut wagons = Vec::new();

    if let Some(path) = &config.roster_file {
        let reader: Box<dyn BufRead> = if path == "-" {
            Box::new(BufReader::new(io::stdin().lock()))
        } else {
            Box::new(BufReader::new(File::open(path)?))
        };
        wagons.extend(roster::read_roster(reader)?);
    }

    wagons.extend(config.wagons.iter().copied());
    Ok(wagons)
}

/// The consist from the original walkthrough: 3 wagons, 75 passengers
fn demo_wagons() -> Vec<Wagon> {
    vec![Wagon::new(678, 20), Wagon::new(342, 40), Wagon::new(832, 15)]
}

/// Drive a cursor by hand to expose the advance/End protocol
fn walk_stepwise(train: &Train) {
    println!("{}", report::header("TRAVERSAL, ONE STEP AT A TIME"));

    let mut cursor = train.cursor();
    loop {
        match cursor.advance() {
            Step::Value(wagon) => println!("{}", wagon),
            Step::End => {
                println!("(end of sequence)");
                break;
            }
        }
    }

    println!("{}", report::step("advancing again after exhaustion"));
    match cursor.advance() {
        Step::Value(wagon) => println!("unexpected wagon: {}", wagon),
        Step::End => println!("(end of sequence, again)"),
    }
}

/// Show that a wagon coupled after cursor creation stays out of reach
fn walk_past_snapshot(train: &mut Train) {
    println!(
        "{}",
        report::header("APPENDS AFTER CURSOR CREATION ARE NOT VISITED")
    );

    let cursor = train.cursor();
    train.append(Wagon::new(901, 5));
    println!("{}", report::step("after coupling one more wagon"));
    println!("{}", train);

    println!("{}", report::step("draining the earlier cursor"));
    let mut drained = 0;
    for wagon in cursor {
        println!("{}", wagon);
        drained += 1;
    }
    println!("({} wagons seen; the new one needs a fresh cursor)", drained);
}

/// Walk the interval generator from the original walkthrough
fn walk_interval() -> Result<()> {
    println!("{}", report::header("INTERVAL GENERATOR"));
    println!("{}", report::step("interval from -3 to 7 by 2"));

    for value in Interval::new(-3, 7, 2)? {
        print!("{}\t", value);
    }
    println!();

    Ok(())
}
