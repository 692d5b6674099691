use smallvec::{smallvec, SmallVec};

/// Ids of one group stored in a single node.
#[derive(Debug, Clone)]
pub struct GroupSet {
    group: u32,
    ids: SmallVec<[u32; 4]>,
}

impl GroupSet {
    pub fn group(&self) -> u32 {
        self.group
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Bucket shared by the grid and the quadtree.
///
/// Node occupancy is small by construction, so groups are found with a linear
/// scan instead of a map. At most one [`GroupSet`] exists per group and
/// `count` always equals the number of ids across all sets.
#[derive(Debug, Clone, Default)]
pub struct ItemNode {
    count: usize,
    sets: Vec<GroupSet>,
}

impl ItemNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn groups(&self) -> impl Iterator<Item = &GroupSet> + '_ {
        self.sets.iter()
    }

    pub fn contains(&self, id: u32, group: u32) -> bool {
        self.sets
            .iter()
            .find(|set| set.group == group)
            .map_or(false, |set| set.ids.contains(&id))
    }

    pub fn insert(&mut self, id: u32, group: u32) {
        self.count += 1;
        for set in self.sets.iter_mut() {
            if set.group == group {
                set.ids.push(id);
                return;
            }
        }
        self.sets.push(GroupSet {
            group,
            ids: smallvec![id],
        });
    }

    /// Removes `id` from `group`. Ordering inside the node is not preserved.
    ///
    /// Returns false and leaves the node untouched when the pair is absent.
    pub fn remove(&mut self, id: u32, group: u32) -> bool {
        let set_idx = match self.sets.iter().position(|set| set.group == group) {
            Some(idx) => idx,
            None => return false,
        };
        let set = &mut self.sets[set_idx];
        let id_idx = match set.ids.iter().position(|&stored| stored == id) {
            Some(idx) => idx,
            None => return false,
        };
        if set.ids.len() == 1 {
            self.sets.swap_remove(set_idx);
        } else {
            set.ids.swap_remove(id_idx);
        }
        self.count -= 1;
        true
    }

    /// With `include` only ids of `group` are appended, otherwise ids of every
    /// other group are.
    pub fn collect(&self, group: u32, include: bool, out: &mut Vec<u32>) {
        if include {
            if let Some(set) = self.sets.iter().find(|set| set.group == group) {
                out.extend_from_slice(&set.ids);
            }
        } else {
            for set in self.sets.iter().filter(|set| set.group != group) {
                out.extend_from_slice(&set.ids);
            }
        }
    }

    pub fn collect_all(&self, out: &mut Vec<u32>) {
        for set in &self.sets {
            out.extend_from_slice(&set.ids);
        }
    }

    /// Moves every id of `other` into this node, merging sets of equal groups.
    pub fn absorb(&mut self, other: ItemNode) {
        self.count += other.count;
        for incoming in other.sets {
            match self.sets.iter_mut().find(|set| set.group == incoming.group) {
                Some(set) => set.ids.extend_from_slice(&incoming.ids),
                None => self.sets.push(incoming),
            }
        }
    }

    pub(crate) fn actual_count(&self) -> usize {
        self.sets.iter().map(GroupSet::len).sum()
    }
}
