use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "consist",
    about = "Assemble a train and walk it with snapshot-bounded cursors"
)]
pub struct Args {
    /// Serial number for the train
    #[arg(short = 't', long = "train-id", value_name = "ID", default_value_t = 8567)]
    pub train_id: u32,

    /// Read wagon specs from FILE, one per line ('-' for stdin)
    #[arg(short = 'r', long, value_name = "FILE")]
    pub roster: Option<String>,

    /// Skip the interval-generator section of the demo
    #[arg(long = "no-interval")]
    pub no_interval: bool,

    /// Wagon specs as ID:PASSENGERS (default: the built-in demo consist)
    #[arg(value_name = "WAGON")]
    pub wagons: Vec<String>,
}
