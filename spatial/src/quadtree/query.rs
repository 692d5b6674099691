use super::*;

impl QuadTree {
    /// Appends candidates for `area` to `out`, see [`ItemNode::collect`].
    ///
    /// Breadth first over two caller owned frontier buffers, so repeated
    /// queries with reused buffers do not allocate. Each thread querying
    /// concurrently needs its own buffers.
    pub fn query(
        &self,
        group: u32,
        include: bool,
        area: Aabb,
        frontier: &mut Vec<usize>,
        temp: &mut Vec<usize>,
        out: &mut Vec<u32>,
    ) {
        self.traverse(area, frontier, temp, |items| items.collect(group, include, out));
    }

    pub fn query_all(
        &self,
        area: Aabb,
        frontier: &mut Vec<usize>,
        temp: &mut Vec<usize>,
        out: &mut Vec<u32>,
    ) {
        self.traverse(area, frontier, temp, |items| items.collect_all(out));
    }

    // The root also holds entries reaching past the tree bounds, so it is
    // visited regardless of `area`.
    fn traverse<F>(&self, area: Aabb, frontier: &mut Vec<usize>, temp: &mut Vec<usize>, mut f: F)
    where
        F: FnMut(&ItemNode),
    {
        frontier.clear();
        temp.clear();
        if self.nodes.is_empty() {
            return;
        }
        frontier.push(0);
        while !frontier.is_empty() {
            for &idx in frontier.iter() {
                let node = &self.nodes[idx];
                if idx != 0 && (node.closed || !node.bounds.intersects(&area)) {
                    continue;
                }
                if !node.items.is_empty() {
                    f(&node.items);
                }
                if node.branch {
                    temp.extend(node.child_range());
                }
            }
            std::mem::swap(frontier, temp);
            temp.clear();
        }
    }
}
