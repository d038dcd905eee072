//! Query-scoped distance and predecessor tables.

use crate::models::{Distance, LocationId};

/// Best distance found so far from a query's source, indexed by [`LocationId`].
///
/// `None` stands for "infinity": no route has been found yet.
///
/// # Examples
///
/// ```
/// use rental_graph::distance::DistanceTable;
/// use rental_graph::models::LocationId;
///
/// let mut table = DistanceTable::new(3, LocationId(0));
/// assert_eq!(table.get(LocationId(0)), Some(0));
/// assert_eq!(table.get(LocationId(2)), None);
///
/// assert!(table.improves(LocationId(2), 9));
/// table.set(LocationId(2), 9);
/// assert!(!table.improves(LocationId(2), 9));
/// assert!(table.improves(LocationId(2), 8));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceTable {
    data: Vec<Option<Distance>>,
}

impl DistanceTable {
    /// Creates a table for `size` locations, infinite everywhere except `source`.
    ///
    /// # Panics
    ///
    /// Panics if `source` is out of bounds.
    pub fn new(size: usize, source: LocationId) -> Self {
        let mut data = vec![None; size];
        data[source.index()] = Some(0);
        Self { data }
    }

    /// Returns the best known distance to `location`, or `None` if unreached.
    pub fn get(&self, location: LocationId) -> Option<Distance> {
        self.data[location.index()]
    }

    /// Records a new best distance for `location`.
    pub fn set(&mut self, location: LocationId, distance: Distance) {
        self.data[location.index()] = Some(distance);
    }

    /// Returns `true` if `candidate` is strictly better than the current entry.
    pub fn improves(&self, location: LocationId, candidate: Distance) -> bool {
        match self.get(location) {
            Some(current) => candidate < current,
            None => true,
        }
    }

    /// Number of locations covered by this table.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of locations with a finite distance.
    pub fn reached(&self) -> usize {
        self.data.iter().filter(|d| d.is_some()).count()
    }
}

/// Location from which each location's best distance was last improved.
///
/// The source, and every location not yet reached, has no predecessor.
#[derive(Debug, Clone)]
pub struct PredecessorTable {
    data: Vec<Option<LocationId>>,
}

impl PredecessorTable {
    /// Creates a table for `size` locations with no predecessors recorded.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size],
        }
    }

    pub fn get(&self, location: LocationId) -> Option<LocationId> {
        self.data[location.index()]
    }

    pub fn set(&mut self, location: LocationId, predecessor: LocationId) {
        self.data[location.index()] = Some(predecessor);
    }

    /// Walks predecessor links back from `destination` and returns the chain
    /// in travel order, ending at `destination`.
    ///
    /// The walk stops at the first location without a predecessor, which is
    /// the source whenever `destination` was reached. The walk is bounded by
    /// the table size, so a corrupted table cannot loop forever.
    pub fn path_to(&self, destination: LocationId) -> Vec<LocationId> {
        let mut path = vec![destination];
        let mut current = destination;
        while let Some(prev) = self.get(current) {
            if path.len() > self.data.len() {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}
