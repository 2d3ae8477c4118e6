use std::collections::{BinaryHeap, HashMap};

use gridwalk_core::Point;

use crate::tile::Tile;

/// Heap entry ordered by tile priority, then insertion order.
#[derive(Clone, Copy)]
struct Entry {
    tile: Tile,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the best tile first.
        other
            .tile
            .cmp_priority(&self.tile)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Entry {}

/// Open and closed sets for a single search call.
///
/// The open set is a priority heap; a cell may sit in it more than once when
/// a cheaper route is found later, and the stale copies are dropped as they
/// surface. The closed set keeps pop order.
pub struct Frontier {
    open: BinaryHeap<Entry>,
    // lowest g queued per cell still open
    open_g: HashMap<Point, u64>,
    closed: Vec<Tile>,
    closed_g: HashMap<Point, u64>,
    seq: u64,
    pops: u64,
}

impl Frontier {
    /// A frontier holding only `start`.
    pub fn new(start: Tile) -> Self {
        let mut f = Self {
            open: BinaryHeap::new(),
            open_g: HashMap::new(),
            closed: Vec::new(),
            closed_g: HashMap::new(),
            seq: 0,
            pops: 0,
        };
        f.push(start);
        f
    }

    /// Queue a tile.
    pub fn push(&mut self, tile: Tile) {
        let g = self.open_g.entry(tile.pos()).or_insert(tile.g());
        *g = (*g).min(tile.g());
        self.open.push(Entry {
            tile,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Pop the best open tile, skipping cells that were already closed.
    pub fn pop(&mut self) -> Option<Tile> {
        while let Some(Entry { tile, .. }) = self.open.pop() {
            if self.closed_g.contains_key(&tile.pos()) {
                continue;
            }
            self.open_g.remove(&tile.pos());
            self.pops += 1;
            return Some(tile);
        }
        None
    }

    /// Finalize a popped tile.
    pub fn close(&mut self, tile: Tile) {
        self.closed_g.entry(tile.pos()).or_insert(tile.g());
        self.closed.push(tile);
    }

    /// Whether `p` is already open with a cost no greater than `g`.
    pub fn open_covers(&self, p: Point, g: u64) -> bool {
        self.open_g.get(&p).is_some_and(|&og| og <= g)
    }

    /// Whether `p` is already closed with a cost no greater than `g`.
    pub fn closed_covers(&self, p: Point, g: u64) -> bool {
        self.closed_g.get(&p).is_some_and(|&cg| cg <= g)
    }

    /// Tiles popped so far (stale copies not counted).
    pub fn pops(&self) -> u64 {
        self.pops
    }

    pub fn is_open_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn closed(&self) -> &[Tile] {
        &self.closed
    }

    /// Consume the frontier, returning closed tiles in pop order.
    pub fn into_closed(self) -> Vec<Tile> {
        self.closed
    }
}
