//! Ordered, sequence-numbered collection backing each repeatable form category.

use serde::Serialize;

use crate::models::form::Qualifies;

/// One entry in an [`EntryList`], paired with its sequence number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot<T> {
    pub seq: u32,
    pub fields: T,
}

/// Insertion-ordered entries of one category.
///
/// `next_seq` only moves forward: removing an entry never frees its number,
/// and only [`EntryList::reset`] rewinds the counter.
#[derive(Debug, Clone)]
pub struct EntryList<T> {
    next_seq: u32,
    items: Vec<Slot<T>>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            next_seq: 0,
            items: Vec::new(),
        }
    }
}

impl<T> EntryList<T> {
    /// Appends `fields` under the next sequence number and returns that number.
    pub fn push(&mut self, fields: T) -> u32 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.items.push(Slot { seq, fields });
        seq
    }

    pub fn get(&self, seq: u32) -> Option<&T> {
        self.items.iter().find(|s| s.seq == seq).map(|s| &s.fields)
    }

    pub fn get_mut(&mut self, seq: u32) -> Option<&mut T> {
        self.items
            .iter_mut()
            .find(|s| s.seq == seq)
            .map(|s| &mut s.fields)
    }

    /// Removes the entry with `seq`. Returns `false` when there was nothing to remove.
    pub fn remove(&mut self, seq: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.seq != seq);
        self.items.len() != before
    }

    /// Drops every entry and rewinds the counter to zero.
    pub fn reset(&mut self) {
        self.items.clear();
        self.next_seq = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }


    pub fn slots(&self) -> &[Slot<T>] {
        &self.items
    }
}

#[cfg(test)]
impl<T> EntryList<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Default> EntryList<T> {
    pub fn add(&mut self) -> u32 {
        self.push(T::default())
    }
}

impl<T: Qualifies> EntryList<T> {
    /// Entries whose mandatory fields are filled, in insertion order.
    pub fn qualifying(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|s| &s.fields).filter(|f| f.qualifies())
    }
}
