use super::*;
use fxhash::FxHashSet;
use std::fmt::Write;

impl QuadTree {
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Allocated node slots, closed ones included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().map(TreeNode::count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.items.is_empty())
    }

    pub fn node_bounds(&self, out: &mut Vec<Aabb>) {
        if self.nodes.is_empty() {
            return;
        }
        let mut stack = NodeStack::new();
        stack.push(0);
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            out.push(node.bounds);
            if node.branch {
                stack.extend(node.child_range());
            }
        }
    }

    /// One line per reachable node with its own id count, indented by level.
    pub fn format_debug(&self) -> String {
        let mut text = String::new();
        if self.nodes.is_empty() {
            return text;
        }
        let mut stack = NodeStack::new();
        stack.push(0);
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            let _ = writeln!(
                text,
                "{}{}",
                "  ".repeat(node.level),
                node.items.count()
            );
            if node.branch {
                stack.extend(node.child_range().rev());
            }
        }
        text
    }

    /// Fails on count drift, a malformed child block or a duplicated entry.
    pub fn validate(&self) -> SpatialResult<()> {
        let mut seen: FxHashSet<(u32, u32)> = FxHashSet::default();
        for (idx, node) in self.nodes.iter().enumerate() {
            let actual = node.items.actual_count();
            if actual != node.items.count() {
                return Err(SpatialError::CountMismatch {
                    node: idx,
                    cached: node.items.count(),
                    actual,
                });
            }
            if node.children != 0 {
                let block_ok = node.children > idx
                    && node.children + 4 <= self.nodes.len()
                    && node
                        .child_range()
                        .all(|child| self.nodes[child].parent == idx);
                if !block_ok {
                    return Err(SpatialError::BrokenChildBlock {
                        node: idx,
                        children: node.children,
                    });
                }
            } else if node.branch {
                return Err(SpatialError::BrokenChildBlock {
                    node: idx,
                    children: 0,
                });
            }
            for set in node.items.groups() {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_debug_lists_reachable_nodes() {
        let mut qt = QuadTree::new(Aabb::new(0.0, 0.0, 100.0, 100.0), 1, 1).unwrap();
        assert_eq!(qt.format_debug(), "");
        qt.insert(Aabb::new(1.0, 1.0, 2.0, 2.0), 0, 0);
        assert_eq!(qt.format_debug(), "0\n  1\n  0\n  0\n  0\n");
    }

    #[test]
    fn validate_reports_duplicates() {
        let mut qt = QuadTree::new(Aabb::new(0.0, 0.0, 100.0, 100.0), 8, 2).unwrap();
        qt.insert(Aabb::new(1.0, 1.0, 2.0, 2.0), 3, 1);
        assert_eq!(qt.validate(), Ok(()));
        qt.insert(Aabb::new(1.0, 1.0, 2.0, 2.0), 3, 1);
        assert_eq!(
            qt.validate(),
            Err(SpatialError::DuplicateEntry { id: 3, group: 1 })
        );
    }

    #[test]
    fn validate_reports_broken_block() {
        let mut qt = QuadTree::new(Aabb::new(0.0, 0.0, 100.0, 100.0), 8, 2).unwrap();
        qt.insert(Aabb::new(1.0, 1.0, 2.0, 2.0), 3, 1);
        qt.nodes[0].branch = true;
        assert_eq!(
            qt.validate(),
            Err(SpatialError::BrokenChildBlock {
                node: 0,
                children: 0
            })
        );
    }
}
