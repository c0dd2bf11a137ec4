//! Single-use traversal cursors over a train's wagon list
//!
//! A cursor shares the train's backing list but caches the list length
//! once, at creation. Wagons appended afterwards land past that bound and
//! are never visited; seeing them takes a fresh cursor.

use std::rc::Rc;

use crate::train::{Train, WagonList};
use crate::wagon::Wagon;

/// One step of a traversal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The next wagon in sequence
    Value(Wagon),
    /// No wagons remain for this cursor. Terminal: every later call
    /// signals `End` again.
    End,
}

/// Traversal state bound to one train at one point in time
pub struct Cursor {
    wagons: WagonList,
    len: usize,
    pos: usize,
}

impl Cursor {
    pub fn new(train: &Train) -> Self {
        let wagons = Rc::clone(train.wagon_list());
        let len = wagons.borrow().len();
        Self {
            wagons,
            len,
            pos: 0,
        }
    }

    /// Yield the next wagon, or signal the end of the sequence
    ///
    /// Exhaustion is not an error: once `pos` reaches the captured length
    /// this keeps returning [`Step::End`], never stale data.
    pub fn advance(&mut self) -> Step {
        if self.pos == self.len {
            return Step::End;
        }
        let wagon = self.wagons.borrow()[self.pos];
        self.pos += 1;
        Step::Value(wagon)
    }

    /// Whether the cursor has signalled (or would signal) `End`
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.len
    }

    /// Zero-based index of the next wagon to yield
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for Cursor {
    type Item = Wagon;

    fn next(&mut self) -> Option<Wagon> {
        match self.advance() {
            Step::Value(wagon) => Some(wagon),
            Step::End => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor {}
