use super::*;

impl QuadTree {
    pub fn new(bounds: Aabb, node_capacity: usize, max_depth: usize) -> SpatialResult<Self> {
        Self::new_with_config(
            bounds,
            Config {
                node_capacity,
                max_depth,
                ..Config::default()
            },
        )
    }

    pub fn new_with_config(bounds: Aabb, config: Config) -> SpatialResult<Self> {
        if !(bounds.is_finite() && bounds.is_normalized()) {
            return Err(SpatialError::InvalidBounds {
                min_x: bounds.min.x,
                min_y: bounds.min.y,
                max_x: bounds.max.x,
                max_y: bounds.max.y,
            });
        }
        if config.node_capacity == 0 {
            return Err(SpatialError::InvalidNodeCapacity {
                capacity: config.node_capacity,
            });
        }
        debug!(
            %bounds,
            node_capacity = config.node_capacity,
            max_depth = config.max_depth,
            "created quadtree"
        );
        Ok(Self {
            nodes: Vec::new(),
            bounds,
            node_capacity: config.node_capacity,
            max_depth: config.max_depth,
            pool_size: config.pool_size,
        })
    }

    /// Files the entry under the deepest open node that fully contains
    /// `bounds`. Entries that fit nowhere, the root included, stay in the root.
    pub fn insert(&mut self, bounds: Aabb, id: u32, group: u32) -> TreeAddress {
        if self.nodes.is_empty() {
            self.nodes.reserve(self.pool_size.max(1));
            self.nodes.push(TreeNode::new(self.bounds, 0, 0, 0));
        }
        TreeAddress(self.place(0, bounds, id, group))
    }

    /// Turns `index` into a branch, allocating its four children on first use
    /// or reopening the ones left from an earlier collapse.
    ///
    /// Ids already stored in the node stay there until their next update.
    /// Returns false for an unknown or closed node, a node at `max_depth`, or
    /// a leaf holding fewer than `node_capacity` ids.
    pub fn split(&mut self, index: usize) -> bool {
        let (children, bounds, level) = match self.nodes.get(index) {
            Some(node) if !node.closed => (node.children, node.bounds, node.level),
            _ => return false,
        };
        if self.nodes[index].branch {
            return true;
        }
        if !self.should_split(index) {
            return false;
        }
        self.nodes[index].branch = true;
        if children == 0 {
            let first = self.nodes.len();
            for (i, quadrant) in bounds.quadrants().into_iter().enumerate() {
                self.nodes
                    .push(TreeNode::new(quadrant, index, first + i, level + 1));
            }
            self.nodes[index].children = first;
            trace!(node = index, first, level, "split node");
        } else {
            for child in children..children + 4 {
                self.nodes[child].reopen();
            }
            trace!(node = index, first = children, level, "reopened node");
        }
        true
    }

    /// Removes the entry. Returns false when it is not stored at `address`
    /// or any of its ancestors.
    pub fn remove(&mut self, address: TreeAddress, id: u32, group: u32) -> bool {
        let holder = match self.remove_along_lineage(address.0, id, group) {
            Some(idx) => idx,
            None => {
                debug!(id, group, node = address.0, "quadtree remove of missing entry");
                return false;
            }
        };
        self.collapse_upward(holder);
        true
    }

    /// Moves the entry to match `bounds` and rewrites `address`.
    ///
    /// An entry that no longer fits its node is reinserted from the root. An
    /// entry that still fits sinks into the tightest open child below its
    /// node. Returns false when the entry cannot be found.
    ///
    /// An entry left in a node that split after it was filed moves on its
    /// first update even with unchanged `bounds`. From then on the address
    /// stays put until `bounds` or the tree around it changes.
    pub fn update(&mut self, address: &mut TreeAddress, bounds: Aabb, id: u32, group: u32) -> bool {
        let holder = match self.locate(address.0, id, group) {
            Some(idx) => idx,
            None => {
                debug!(id, group, node = address.0, "quadtree update of missing entry");
                return false;
            }
        };

        if holder != 0 && !bounds.fits(&self.nodes[holder].bounds) {
            self.nodes[holder].items.remove(id, group);
            self.collapse_upward(holder);
            *address = TreeAddress(self.place(0, bounds, id, group));
            return true;
        }

        if self.nodes[holder].branch && self.descend(holder, &bounds) != holder {
            self.nodes[holder].items.remove(id, group);
            *address = TreeAddress(self.place(holder, bounds, id, group));
            return true;
        }

        *address = TreeAddress(holder);
        true
    }

    /// Deepest open node at or below `start` that fully contains `bounds`.
    pub(crate) fn descend(&self, start: usize, bounds: &Aabb) -> usize {
        let mut idx = start;
        'outer: loop {
            let node = &self.nodes[idx];
            if !node.branch {
                return idx;
            }
            for child in node.child_range() {
                let child = &self.nodes[child];
                if !child.closed && bounds.fits(&child.bounds) {
                    idx = child.index;
                    continue 'outer;
                }
            }
            return idx;
        }
    }

    /// Inserts below `start` and splits while the receiving node is full. The
    /// new entry sinks after every split since its address is ours to hand out.
    fn place(&mut self, start: usize, bounds: Aabb, id: u32, group: u32) -> usize {
        let mut idx = self.descend(start, &bounds);
        self.nodes[idx].items.insert(id, group);
        while self.should_split(idx) {
            self.split(idx);
            let target = self.descend(idx, &bounds);
            if target == idx {
                break;
            }
            self.nodes[idx].items.remove(id, group);
            self.nodes[target].items.insert(id, group);
            idx = target;
        }
        idx
    }

    #[inline(always)]
    fn should_split(&self, idx: usize) -> bool {
        let node = &self.nodes[idx];
        !node.branch && node.items.count() >= self.node_capacity && node.level < self.max_depth
    }

    /// Node at or above `start` that stores the entry.
    fn locate(&self, start: usize, id: u32, group: u32) -> Option<usize> {
        let mut idx = start;
        loop {
            let node = self.nodes.get(idx)?;
            if node.items.contains(id, group) {
                return Some(idx);
            }
            if idx == 0 {
                return None;
            }
            idx = node.parent;
        }
    }

    fn remove_along_lineage(&mut self, start: usize, id: u32, group: u32) -> Option<usize> {
        let mut idx = start;
        loop {
            let node = self.nodes.get_mut(idx)?;
            if node.items.remove(id, group) {
                return Some(idx);
            }
            if idx == 0 {
                return None;
            }
            idx = node.parent;
        }
    }

    /// Collapses every branch on the way to the root whose subtree holds fewer
    /// than `node_capacity` ids, stopping at the first one that does not.
    fn collapse_upward(&mut self, from: usize) {
        let mut idx = from;
        loop {
            if self.nodes[idx].branch {
                if self.subtree_count_capped(idx, self.node_capacity) >= self.node_capacity {
                    return;
                }
                self.collapse(idx);
            }
            if idx == 0 {
                return;
            }
            idx = self.nodes[idx].parent;
        }
    }

    /// Folds the ids of every open descendant into `idx` and closes them.
    fn collapse(&mut self, idx: usize) {
        let mut stack = NodeStack::new();
        stack.extend(self.nodes[idx].child_range());
        let mut folded = 0usize;
        while let Some(child_idx) = stack.pop() {
            let child = &mut self.nodes[child_idx];
            if child.closed {
                continue;
            }
            let was_branch = child.branch;
            let grandchildren = child.child_range();
            let items = child.close();
            if was_branch {
                stack.extend(grandchildren);
            }
            if !items.is_empty() {
                folded += items.count();
                self.nodes[idx].items.absorb(items);
            }
        }
        self.nodes[idx].branch = false;
        trace!(node = idx, folded, "collapsed node");
    }

    /// Ids stored in the subtree of `idx`, counting stops once `limit` is reached.
    pub(crate) fn subtree_count_capped(&self, idx: usize, limit: usize) -> usize {
        let mut total = 0usize;
        let mut stack = NodeStack::new();
        stack.push(idx);
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx];
            total += node.items.count();
            if total >= limit {
                return total;
            }
            if node.branch {
                stack.extend(node.child_range());
            }
        }
        total
    }
}
