use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::wagon::Wagon;

/// Shared handle to a train's backing wagon list.
///
/// Outstanding cursors hold a clone of this handle, so the list must only
/// ever be grown in place. Replacing it wholesale would leave those
/// cursors reading a detached list.
pub(crate) type WagonList = Rc<RefCell<Vec<Wagon>>>;

/// Ordered, append-only collection of wagons with a running passenger total.
pub struct Train {
    id: u32,
    wagons: WagonList,
    passengers_total: u64,
}

impl Train {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            wagons: Rc::new(RefCell::new(Vec::new())),
            passengers_total: 0,
        }
    }

    /// Build a train already coupled to the given wagons
    pub fn with_wagons(id: u32, wagons: impl IntoIterator<Item = Wagon>) -> Self {
        let mut train = Train::new(id);
        for wagon in wagons {
            train.append(wagon);
        }
        train
    }

    /// Couple a wagon to the end of the train
    ///
    /// Grows the backing list in place, never replaces it: a cursor issued
    /// earlier keeps its captured length and simply never reaches the new
    /// wagon.
    pub fn append(&mut self, wagon: Wagon) {
        self.passengers_total += u64::from(wagon.passengers());
        self.wagons.borrow_mut().push(wagon);
    }

    /// Serial number of the train itself
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Number of wagons currently coupled
    pub fn len(&self) -> usize {
        self.wagons.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.wagons.borrow().is_empty()
    }

    /// Sum of the passenger counts of every wagon appended so far
    pub fn total_passengers(&self) -> u64 {
        self.passengers_total
    }

    /// Human-readable summary: wagon count and passenger total
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Start a fresh traversal over the wagons present right now
    ///
    /// Each call returns a new cursor with its own position, so two
    /// traversals over the same train never interfere.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self)
    }

    pub(crate) fn wagon_list(&self) -> &WagonList {
        &self.wagons
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Train #{} composed of {} wagons carrying {} passengers total.",
            self.id,
            self.len(),
            self.passengers_total
        )
    }
}

impl IntoIterator for &Train {
    type Item = Wagon;
    type IntoIter = Cursor;

    fn into_iter(self) -> Cursor {
        self.cursor()
    }
}
