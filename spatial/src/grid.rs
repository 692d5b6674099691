use crate::error::{SpatialError, SpatialResult};
use crate::node::ItemNode;
use common::shapes::{Aabb, Vec2};
use fxhash::FxHashSet;
use std::ops::Range;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridAddress {
    x: usize,
    y: usize,
}

impl GridAddress {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

/// Fixed `width * height` spatial hash with O(1) mutation.
///
/// Works best when entities are evenly spread and not larger than a cell.
/// The grid origin is `(0, 0)` and it grows towards positive coordinates;
/// positions outside are filed in the nearest border cell.
pub struct Grid {
    nodes: Vec<ItemNode>,
    inv_cell_size: Vec2,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize, cell_size: Vec2) -> SpatialResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpatialError::InvalidGridDims { width, height });
        }
        if !(cell_size.is_finite() && cell_size.x > 0.0 && cell_size.y > 0.0) {
            return Err(SpatialError::InvalidCellSize {
                x: cell_size.x,
                y: cell_size.y,
            });
        }
        let len = width
            .checked_mul(height)
            .ok_or(SpatialError::InvalidGridDims { width, height })?;
        debug!(width, height, cell_x = cell_size.x, cell_y = cell_size.y, "created grid");
        Ok(Self {
            nodes: vec![ItemNode::default(); len],
            inv_cell_size: cell_size.recip(),
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> Vec2 {
        self.inv_cell_size.recip()
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().map(ItemNode::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(ItemNode::is_empty)
    }

    pub fn node(&self, address: GridAddress) -> Option<&ItemNode> {
        let idx = self.index(address)?;
        self.nodes.get(idx)
    }

    /// Cell `pos` belongs to, clamped into the grid.
    #[inline(always)]
    pub fn address(&self, pos: Vec2) -> GridAddress {
        let cell = pos.mul(self.inv_cell_size).floor();
        GridAddress {
            x: clamp_axis(cell.x, self.width),
            y: clamp_axis(cell.y, self.height),
        }
    }

    pub fn insert(&mut self, pos: Vec2, id: u32, group: u32) -> GridAddress {
        let address = self.address(pos);
        let idx = address.y * self.width + address.x;
        self.nodes[idx].insert(id, group);
        address
    }

    pub fn remove(&mut self, address: GridAddress, id: u32, group: u32) -> bool {
        let removed = match self.index(address) {
            Some(idx) => self.nodes[idx].remove(id, group),
            None => false,
        };
        if !removed {
            debug!(id, group, x = address.x, y = address.y, "grid remove of missing entry");
        }
        removed
    }

    /// Refiles the entry when `pos` moved it to another cell. `address` is
    /// rewritten only on success.
    pub fn update(&mut self, address: &mut GridAddress, pos: Vec2, id: u32, group: u32) -> bool {
        let next = self.address(pos);
        if *address == next {
            return true;
        }
        if !self.remove(*address, id, group) {
            return false;
        }
        let idx = next.y * self.width + next.x;
        self.nodes[idx].insert(id, group);
        *address = next;
        true
    }

    /// Appends candidates for `area` to `out`, see [`ItemNode::collect`].
    ///
    /// Entities are filed by their anchor point only, so every cell within one
    /// cell of `area` is visited. Ordering of the result is unspecified.
    pub fn query(&self, area: Aabb, group: u32, include: bool, out: &mut Vec<u32>) {
        self.for_each_occupied(area, |node| node.collect(group, include, out));
    }

    pub fn query_all(&self, area: Aabb, out: &mut Vec<u32>) {
        self.for_each_occupied(area, |node| node.collect_all(out));
    }

    fn for_each_occupied<F>(&self, area: Aabb, mut f: F)
    where
        F: FnMut(&ItemNode),
    {
        let min = area.min.mul(self.inv_cell_size).floor();
        let max = area.max.mul(self.inv_cell_size).floor();
        let xs = axis_range(min.x, max.x, self.width);
        let ys = axis_range(min.y, max.y, self.height);
        for y in ys {
            let row = &self.nodes[y * self.width..(y + 1) * self.width];
            for node in &row[xs.clone()] {
                if node.count() != 0 {
                    f(node);
                }
            }
        }
    }

    pub fn validate(&self) -> SpatialResult<()> {
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
        for (idx, node) in self.nodes.iter().enumerate() {
            let actual = node.actual_count();
            if actual != node.count() {
                return Err(SpatialError::CountMismatch {
                    node: idx,
                    cached: node.count(),
                    actual,
                });
            }
            for set in node.groups() {
                for &id in set.ids() {
                    if !seen.insert((id, set.group())) {
                        return Err(SpatialError::DuplicateEntry {
                            id,
                            group: set.group(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    #[inline(always)]
    fn index(&self, address: GridAddress) -> Option<usize> {
        if address.x < self.width && address.y < self.height {
            Some(address.y * self.width + address.x)
        } else {
            None
        }
    }
}

#[inline(always)]
fn clamp_axis(cell: f32, len: usize) -> usize {
    // NaN lands in the first cell.
    if !(cell > 0.0) {
        return 0;
    }
    (cell as usize).min(len - 1)
}

/// Cells `[min - 1, max + 1]` restricted to `[0, len)`.
#[inline(always)]
fn axis_range(min: f32, max: f32, len: usize) -> Range<usize> {
    let lo = min - 1.0;
    let hi = max + 1.0;
    if !(hi >= 0.0) || !(lo < len as f32) {
        return 0..0;
    }
    let start = if lo > 0.0 { lo as usize } else { 0 };
    let end = (hi as usize).saturating_add(1).min(len);
    if start >= end {
        return 0..0;
    }
    start..end
}
