//! Binary subnet tree used by the interactive mode.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Ownership
//! flows root to children; the parent link is a plain index used for lookup
//! only. Joined subtrees release their slots to a free list.

use crate::models::{add_to_addr, Cidr, Network, IPV4_BITS, IPV6_BITS};
use std::ops::Index;

/// Index of a node inside a [`SubnetTree`].
pub type NodeId = usize;

/// Deepest prefix an IPv4 node may be split to. /31 and /32 have no usable
/// host range.
pub const MAX_SPLIT_DEPTH_V4: u8 = IPV4_BITS - 2;
/// IPv6 counterpart of [`MAX_SPLIT_DEPTH_V4`].
pub const MAX_SPLIT_DEPTH_V6: u8 = IPV6_BITS - 2;

/// Split depth limit for an address family of `addr_bits` bits.
pub fn max_split_depth(addr_bits: u8) -> u8 {
    if addr_bits == IPV4_BITS {
        MAX_SPLIT_DEPTH_V4
    } else {
        MAX_SPLIT_DEPTH_V6
    }
}

/// One network in the tree. A node has either zero or two children.
#[derive(Debug, Clone)]
pub struct SubnetNode {
    pub network: Network,
    pub parent: Option<NodeId>,
    /// Lower half first, upper half second.
    pub children: Vec<NodeId>,
}

impl SubnetNode {
    pub fn cidr(&self) -> Cidr {
        self.network.cidr
    }

    pub fn mask_bits(&self) -> u8 {
        self.network.mask_bits
    }

    /// A node is a leaf iff it is not split.
    pub fn is_split(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Structural snapshot of a subtree: which nodes are split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Split(Box<Shape>, Box<Shape>),
}

/// Arena-backed binary tree of subnets.
#[derive(Debug, Clone)]
pub struct SubnetTree {
    nodes: Vec<Option<SubnetNode>>,
    free: Vec<NodeId>,
    root: NodeId,
    max_split_depth: u8,
}

impl SubnetTree {
    /// Create a tree holding a single unsplit root.
    pub fn new(cidr: Cidr) -> SubnetTree {
        let network = Network::from_cidr(cidr);
        let max_split_depth = max_split_depth(network.addr_bits());
        SubnetTree {
            nodes: vec![Some(SubnetNode {
                network,
                parent: None,
                children: Vec::new(),
            })],
            free: Vec::new(),
            root: 0,
            max_split_depth,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn max_split_depth(&self) -> u8 {
        self.max_split_depth
    }

    /// Look up a node, `None` if the slot was released by a join.
    pub fn get(&self, id: NodeId) -> Option<&SubnetNode> {
        self.nodes.get(id).and_then(|slot| slot.as_ref())
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split a leaf into two halves one prefix bit longer.
    ///
    /// Returns `false` without touching the tree if the node is already split
    /// or sits at the split depth limit.
    pub fn split(&mut self, id: NodeId) -> bool {
        let node = &self[id];
        if node.is_split() || node.mask_bits() >= self.max_split_depth {
            return false;
        }

        let bits = node.mask_bits() + 1;
        let lower = Network::from_cidr(Cidr {
            addr: node.network.network_addr,
            bits,
        });
        let upper = Network::from_cidr(Cidr {
            addr: add_to_addr(lower.broadcast_addr, 1),
            bits,
        });

        let lower_id = self.alloc(lower, id);
        let upper_id = self.alloc(upper, id);
        self.node_mut(id).children = vec![lower_id, upper_id];
        true
    }

    /// Split recursively until every leaf under `id` reaches `target_bits`.
    ///
    /// Stops quietly on any branch where a split is refused.
    pub fn split_to_depth(&mut self, id: NodeId, target_bits: u8) {
        if self[id].mask_bits() >= target_bits {
            return;
        }
        if !self.split(id) {
            return;
        }
        for child in self[id].children.clone() {
            self.split_to_depth(child, target_bits);
        }
    }

    /// Collapse the whole subtree under `id` back into `id`.
    ///
    /// Joining an ancestor also erases every split below it, not just one
    /// level. Returns `false` if `id` was not split.
    pub fn join(&mut self, id: NodeId) -> bool {
        if !self[id].is_split() {
            return false;
        }

        let children = std::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.join(child);
            self.release(child);
        }
        true
    }

    /// Walk parent links from `id` to the node whose prefix is `target_bits`.
    ///
    /// `None` when `target_bits` is shallower than the root or deeper than `id`.
    pub fn ancestor_at_depth(&self, id: NodeId, target_bits: u8) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self[node_id];
            if node.mask_bits() == target_bits {
                return Some(node_id);
            }
            current = node.parent;
        }
        None
    }

    /// Leaves under `id`, depth-first left to right.
    pub fn leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        self.collect_leaves(id, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, id: NodeId, leaves: &mut Vec<NodeId>) {
        let node = &self[id];
        if !node.is_split() {
            leaves.push(id);
        } else {
            for &child in &node.children {
                self.collect_leaves(child, leaves);
            }
        }
    }

    /// Find the live node for `cidr`, descending from the root.
    pub fn find(&self, cidr: Cidr) -> Option<NodeId> {
        let target = cidr.masked();
        let mut id = self.root;
        loop {
            let node = &self[id];
            if node.cidr() == target {
                return Some(id);
            }
            if !node.is_split() || target.bits <= node.mask_bits() {
                return None;
            }
            let upper = node.children[1];
            id = if target.addr >= self[upper].network.network_addr {
                upper
            } else {
                node.children[0]
            };
        }
    }

    /// Snapshot which nodes under `id` are split.
    pub fn shape(&self, id: NodeId) -> Shape {
        let node = &self[id];
        match node.children.as_slice() {
            [lower, upper] => Shape::Split(Box::new(self.shape(*lower)), Box::new(self.shape(*upper))),
            _ => Shape::Leaf,
        }
    }

    /// Re-split the leaf `id` so its subtree matches `shape`.
    pub fn restore_shape(&mut self, id: NodeId, shape: &Shape) {
        if let Shape::Split(lower, upper) = shape {
            if !self[id].is_split() && !self.split(id) {
                return;
            }
            let children = self[id].children.clone();
            self.restore_shape(children[0], lower);
            self.restore_shape(children[1], upper);
        }
    }

    /// The subtree under `id` as a [`Network`] whose `subnets` are its
    /// children, recursively.
    pub fn to_network(&self, id: NodeId) -> Network {
        let node = &self[id];
        let mut network = node.network.clone();
        network.subnets = node
            .children
            .iter()
            .map(|&child| self.to_network(child))
            .collect();
        network
    }

    fn alloc(&mut self, network: Network, parent: NodeId) -> NodeId {
        let node = Some(SubnetNode {
            network,
            parent: Some(parent),
            children: Vec::new(),
        });
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id] = None;
        self.free.push(id);
    }

    fn node_mut(&mut self, id: NodeId) -> &mut SubnetNode {
        match self.nodes.get_mut(id).and_then(|slot| slot.as_mut()) {
            Some(node) => node,
            None => panic!("stale subnet node id {id}"),
        }
    }
}

impl Index<NodeId> for SubnetTree {
    type Output = SubnetNode;

    fn index(&self, id: NodeId) -> &SubnetNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale subnet node id {id}"),
        }
    }
}
