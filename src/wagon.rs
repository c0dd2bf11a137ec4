use std::fmt;

/// A single record in a train: serial number plus passenger count.
///
/// Wagons are plain values. They are built once, never mutated, and move
/// in and out of a `Train` by copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wagon {
    id: u32,
    passengers: u32,
}

impl Wagon {
    pub fn new(id: u32, passengers: u32) -> Self {
        Self { id, passengers }
    }

    /// Serial number of the equipment
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of passengers onboard
    pub fn passengers(&self) -> u32 {
        self.passengers
    }
}

impl fmt::Display for Wagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wagon #{} carrying {} passengers.",
            self.id, self.passengers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let wagon = Wagon::new(678, 20);
        assert_eq!(wagon.to_string(), "Wagon #678 carrying 20 passengers.");
    }

    #[test]
    fn test_copies_compare_equal() {
        let wagon = Wagon::new(342, 40);
        let copy = wagon;
        assert_eq!(wagon, copy);
    }
}
