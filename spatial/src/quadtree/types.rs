use crate::node::ItemNode;
use common::shapes::Aabb;
use smallvec::SmallVec;

pub(crate) type NodeStack = SmallVec<[usize; 64]>;

/// Opaque node index handed out by insert and refreshed by update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TreeAddress(pub(crate) usize);

impl TreeAddress {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub(crate) items: ItemNode,
    pub(crate) bounds: Aabb,
    /// First of four contiguous children, 0 when never split.
    pub(crate) children: usize,
    pub(crate) parent: usize,
    pub(crate) index: usize,
    pub(crate) level: usize,
    pub(crate) branch: bool,
    pub(crate) closed: bool,
}

impl TreeNode {
    pub(crate) fn new(bounds: Aabb, parent: usize, index: usize, level: usize) -> Self {
        Self {
            items: ItemNode::default(),
            bounds,
            children: 0,
            parent,
            index,
            level,
            branch: false,
            closed: false,
        }
    }

    pub fn items(&self) -> &ItemNode {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.count()
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn children(&self) -> Option<usize> {
        if self.children == 0 {
            None
        } else {
            Some(self.children)
        }
    }

    pub fn parent(&self) -> usize {
        self.parent
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_branch(&self) -> bool {
        self.branch
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline(always)]
    pub(crate) fn child_range(&self) -> std::ops::Range<usize> {
        self.children..self.children + 4
    }

    pub(crate) fn reopen(&mut self) {
        debug_assert!(self.items.is_empty(), "reopened node {} still holds ids", self.index);
        self.closed = false;
        self.branch = false;
    }

    pub(crate) fn close(&mut self) -> ItemNode {
        self.closed = true;
        self.branch = false;
        std::mem::take(&mut self.items)
    }
}
