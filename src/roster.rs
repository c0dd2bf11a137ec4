use std::io::BufRead;

use crate::error::{ConsistError, Result};
use crate::wagon::Wagon;

/// Parse a single `ID:PASSENGERS` wagon spec
pub fn parse_wagon_spec(spec: &str) -> Result<Wagon> {
    let bad_spec = || ConsistError::InvalidWagonSpec(spec.to_string());

    let (id, passengers) = spec.split_once(':').ok_or_else(bad_spec)?;
    let id: u32 = id.trim().parse().map_err(|_| bad_spec())?;
    let passengers: u32 = passengers.trim().parse().map_err(|_| bad_spec())?;

    Ok(Wagon::new(id, passengers))
}

/// Read wagon specs from a roster, one per line
///
/// Blank lines and `#` comments are skipped.
pub fn read_roster<R: BufRead>(reader: R) -> Result<Vec<Wagon>> {
    let mut wagons = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        wagons.push(parse_wagon_spec(line)?);
    }

    Ok(wagons)
}
