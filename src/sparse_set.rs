//sparse_set.rs
//! Fixed-capacity sparse set mapping a bounded index domain to values.
//!
//! Two arrays back the container: a sparse translation table from domain
//! index to dense slot, and a dense array holding the live values
//! contiguously. Insert, remove, lookup, and containment are all O(1);
//! iteration walks only the occupied dense slots.

use crate::error::{Result, SparseSetError};

#[derive(Debug)]
struct Entry<T> {
    /// Domain index that owns this dense slot (inverse of the sparse table).
    key: usize,
    value: T,
}

/// A sparse set over the index domain `[0, capacity)`.
///
/// Capacity is fixed at construction; the container never reallocates.
/// `sparse[i] == capacity` is the sentinel for "index `i` holds no value",
/// which is unambiguous because `capacity` is never a valid dense slot.
///
/// Dense order is unspecified after any removal: removal relocates the last
/// dense entry into the vacated slot to stay gap-free.
#[derive(Debug)]
pub struct SparseSet<T> {
    sparse: Box<[usize]>,
    dense: Vec<Entry<T>>,
}

impl<T> SparseSet<T> {
    /// Creates an empty set for the index domain `[0, capacity)`.
    pub fn new(capacity: usize) -> Self {
        Self {
            sparse: vec![capacity; capacity].into_boxed_slice(),
            dense: Vec::with_capacity(capacity),
        }
    }

    /// Maximum number of elements the set can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.sparse.len()
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// True when `len() == capacity()`; inserting a new index would fail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.dense.len() == self.capacity()
    }

    /// Dense slot for `index`, if the index is in range and occupied.
    #[inline]
    fn slot(&self, index: usize) -> Option<usize> {
        let slot = *self.sparse.get(index)?;
        (slot != self.capacity()).then_some(slot)
    }

    /// True if a value is attached to this index.
    ///
    /// An index outside `[0, capacity)` is never contained.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.slot(index).is_some()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slot(index).map(|slot| &self.dense[slot].value)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.slot(index)?;
        Some(&mut self.dense[slot].value)
    }

    /// Checked accessor: the element stored at `index`.
    ///
    /// Unlike [`get`](Self::get), failure is loud: an index outside the
    /// domain reports `IndexOutOfBounds`, a valid but unoccupied index
    /// reports `MissingElement`.
    pub fn at(&self, index: usize) -> Result<&T> {
        let capacity = self.capacity();
        let slot = *self
            .sparse
            .get(index)
            .ok_or_else(|| SparseSetError::index_out_of_bounds(index, capacity))?;
        if slot == capacity {
            return Err(SparseSetError::missing_element(index));
        }
        Ok(&self.dense[slot].value)
    }

    /// Checked mutable accessor, see [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let capacity = self.capacity();
        let slot = *self
            .sparse
            .get(index)
            .ok_or_else(|| SparseSetError::index_out_of_bounds(index, capacity))?;
        if slot == capacity {
            return Err(SparseSetError::missing_element(index));
        }
        Ok(&mut self.dense[slot].value)
    }

    /// Unchecked accessor: no bounds or occupancy check.
    ///
    /// # Safety
    ///
    /// `index` must be in `[0, capacity)` and `contains(index)` must be
    /// true. Violating either reads garbage slot numbers and indexes the
    /// dense array out of bounds.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        let slot = *self.sparse.get_unchecked(index);
        &self.dense.get_unchecked(slot).value
    }

    /// Unchecked mutable accessor, see [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// Same contract as [`get_unchecked`](Self::get_unchecked).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        let slot = *self.sparse.get_unchecked(index);
        &mut self.dense.get_unchecked_mut(slot).value
    }

    /// Inserts `value` at `index`, replacing the current element if one
    /// exists. Returns a reference to the stored value.
    ///
    /// Replacement drops the old value in place and leaves the dense slot
    /// and back-reference untouched, so `len()` does not change. A fresh
    /// index takes the next free dense slot; if the set is full this fails
    /// with `CapacityExhausted` and the set is unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T> {
        self.insert_with(index, move || value)
    }

    /// Inserts the value produced by `make` at `index`.
    ///
    /// `make` runs only after the index and capacity checks pass, and the
    /// slot is committed only after `make` returns: a panicking constructor
    /// leaves the set exactly as it was.
    pub fn insert_with<F>(&mut self, index: usize, make: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        let capacity = self.capacity();
        let slot = *self
            .sparse
            .get(index)
            .ok_or_else(|| SparseSetError::index_out_of_bounds(index, capacity))?;

        if slot != capacity {
            // Replace in place; translation entries stay as they are.
            let entry = &mut self.dense[slot];
            entry.value = make();
            return Ok(&mut entry.value);
        }

        if self.dense.len() == capacity {
            return Err(SparseSetError::capacity_exhausted(capacity));
        }

        let slot = self.dense.len();
        self.dense.push(Entry {
            key: index,
            value: make(),
        });
        self.sparse[index] = slot;
        Ok(&mut self.dense[slot].value)
    }

    /// Removes and returns the element at `index`.
    ///
    /// An out-of-range or unoccupied index is a silent no-op returning
    /// `None`, which makes repeated removal safe. The last dense entry is
    /// relocated into the vacated slot to keep the dense array compact, so
    /// iteration order is unspecified afterwards.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let capacity = self.capacity();
        let slot = self.slot(index)?;
        let entry = self.dense.swap_remove(slot);
        if let Some(moved) = self.dense.get(slot) {
            // Re-aim the relocated entry's translation at its new slot.
            self.sparse[moved.key] = slot;
        }
        self.sparse[index] = capacity;
        Some(entry.value)
    }

    /// Removes every element; each live value is dropped exactly once.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        self.sparse.fill(capacity);
        self.dense.clear();
    }

    /// Iterates the occupied elements as `(index, &value)` pairs, in dense
    /// storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.dense.iter().map(|entry| (entry.key, &entry.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.dense
            .iter_mut()
            .map(|entry| (entry.key, &mut entry.value))
    }

    /// Iterates the occupied domain indices in dense storage order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.dense.iter().map(|entry| entry.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.dense.iter().map(|entry| &entry.value)
    }

    /// Verifies the sparse/dense translation invariants.
    ///
    /// Every dense entry's back-reference must point at a sparse entry that
    /// points back at its slot, and the sparse table must claim exactly
    /// `len()` occupied slots. Intended for debug assertions and tests.
    pub fn check_consistency(&self) -> Result<()> {
        let capacity = self.capacity();
        for (slot, entry) in self.dense.iter().enumerate() {
            let claimed = self.sparse.get(entry.key).copied();
            if claimed != Some(slot) {
                return Err(SparseSetError::consistency_violation(format!(
                    "dense slot {} backed by index {} but sparse maps it to {:?}",
                    slot, entry.key, claimed
                )));
            }
        }
        let occupied = self.sparse.iter().filter(|&&slot| slot != capacity).count();
        if occupied != self.dense.len() {
            return Err(SparseSetError::consistency_violation(format!(
                "sparse table claims {} occupied slots, dense holds {}",
                occupied,
                self.dense.len()
            )));
        }
        Ok(())
    }
}
