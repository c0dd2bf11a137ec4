use crate::cli::Args;
use crate::error::Result;
use crate::roster;
use crate::wagon::Wagon;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub train_id: u32,
    pub roster_file: Option<String>,
    pub wagons: Vec<Wagon>,
    pub show_interval: bool,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let wagons: Result<Vec<Wagon>> = args
            .wagons
            .iter()
            .map(|s| roster::parse_wagon_spec(s))
            .collect();

        Ok(Config {
            train_id: args.train_id,
            roster_file: args.roster.clone(),
            wagons: wagons?,
            show_interval: !args.no_interval,
        })
    }

    /// Whether to fall back to the built-in demo consist
    pub fn use_demo_wagons(&self) -> bool {
        self.roster_file.is_none() && self.wagons.is_empty()
    }
}
