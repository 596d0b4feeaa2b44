//! Octree color accumulator
//!
//! Colors are filed into a tree whose level `n` branches on bit `7 - n` of
//! each of red, green and blue. Red contributes the high bit of the 3-bit
//! branch code, green the middle bit, blue the low bit.
//!
//! Nodes live in an arena and refer to their children by handle. Each level
//! keeps a stack of the non-leaf nodes created at that depth; reduction pops
//! from the deepest non-empty stack, so the most recently created node of
//! that level is merged first.

use crate::{QuantError, QuantResult};
use log::{debug, trace};
use octopal_core::color;

/// Deepest supported tree (one level per bit of an 8-bit channel).
pub const MAX_COLOR_BITS: u32 = 8;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct OctreeNode {
    red: u64,
    green: u64,
    blue: u64,
    pixel_count: u64,
    children: [Option<NodeId>; 8],
    is_leaf: bool,
    palette_index: usize,
}

impl OctreeNode {
    #[inline]
    fn increment(&mut self, pixel: u32) {
        let (r, g, b) = color::extract_rgb(pixel);
        self.red += r as u64;
        self.green += g as u64;
        self.blue += b as u64;
        self.pixel_count += 1;
    }

    /// Mean color, truncated per channel.
    fn average(&self) -> u32 {
        let n = self.pixel_count.max(1);
        color::compose_rgb(
            (self.red / n) as u8,
            (self.green / n) as u8,
            (self.blue / n) as u8,
        )
    }
}

/// Accumulated statistics of one leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafStats {
    /// Number of pixels filed under this leaf
    pub pixel_count: u64,
    /// Averaged opaque color (`0xAARRGGBB`, alpha 255)
    pub color: u32,
}

/// Octree for color quantization
#[derive(Debug, Clone)]
pub struct Octree {
    nodes: Vec<OctreeNode>,
    /// Released slots available for reuse
    free: Vec<NodeId>,
    /// Non-leaf nodes per level, most recently created last
    reducible: Vec<Vec<NodeId>>,
    max_color_bits: u32,
    leaf_count: usize,
    /// Last inserted color and the leaf it landed in
    previous: Option<(u32, NodeId)>,
}

/// 3-bit child index for `pixel` at `level`.
#[inline]
fn child_index(pixel: u32, level: usize) -> usize {
    let shift = 7 - level;
    let (r, g, b) = color::extract_rgb(pixel);
    let r_bit = ((r >> shift) & 1) as usize;
    let g_bit = ((g >> shift) & 1) as usize;
    let b_bit = ((b >> shift) & 1) as usize;
    (r_bit << 2) | (g_bit << 1) | b_bit
}

impl Octree {
    /// Create an empty tree with leaves at depth `max_color_bits`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantError::ColorBitsOutOfRange`] unless
    /// `1 <= max_color_bits <= 8`.
    pub fn new(max_color_bits: u32) -> QuantResult<Self> {
        if !(1..=MAX_COLOR_BITS).contains(&max_color_bits) {
            return Err(QuantError::ColorBitsOutOfRange(max_color_bits));
        }

        let mut reducible = vec![Vec::new(); max_color_bits as usize];
        reducible[0].push(ROOT);

        Ok(Self {
            nodes: vec![OctreeNode::default()],
            free: Vec::new(),
            reducible,
            max_color_bits,
            leaf_count: 0,
            previous: None,
        })
    }

    /// Tree depth at which leaves are created.
    #[inline]
    pub fn max_color_bits(&self) -> u32 {
        self.max_color_bits
    }

    /// Number of leaves currently in the tree.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    fn alloc(&mut self, level: usize) -> NodeId {
        let is_leaf = level == self.max_color_bits as usize;
        let node = OctreeNode {
            is_leaf,
            ..OctreeNode::default()
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        if is_leaf {
            self.leaf_count += 1;
        } else {
            self.reducible[level].push(id);
        }
        id
    }

    /// File one color into the tree.
    ///
    /// Only the RGB channels take part; the caller decides which pixels are
    /// visible enough to count.
    pub fn add_color(&mut self, pixel: u32) {
        if let Some((prev, leaf)) = self.previous {
            if prev == pixel {
                self.nodes[leaf].increment(pixel);
                return;
            }
        }

        let mut id = ROOT;
        let mut level = 0;
        while !self.nodes[id].is_leaf {
            let idx = child_index(pixel, level);
            let existing = self.nodes[id].children[idx];
            id = match existing {
                Some(child) => child,
                None => {
                    let child = self.alloc(level + 1);
                    self.nodes[id].children[idx] = Some(child);
                    child
                }
            };
            level += 1;
        }

        self.nodes[id].increment(pixel);
        self.previous = Some((pixel, id));
    }

    /// Collapse one node into a leaf.
    ///
    /// The node comes from the deepest level that still has non-leaf nodes,
    /// taking the most recently created one. Its children's statistics are
    /// merged into it and their slots released, so the leaf count drops by
    /// one less than the number of children merged.
    ///
    /// Returns `false` if nothing is left to collapse.
    pub fn reduce(&mut self) -> bool {
        // An empty root has nothing to merge
        if self.leaf_count == 0 {
            return false;
        }
        let Some((level, id)) = (0..self.reducible.len())
            .rev()
            .find_map(|level| self.reducible[level].pop().map(|id| (level, id)))
        else {
            return false;
        };

        let children = std::mem::take(&mut self.nodes[id].children);
        let mut merged = 0;
        for child in children.into_iter().flatten() {
            let OctreeNode {
                red,
                green,
                blue,
                pixel_count,
                ..
            } = self.nodes[child];
            let node = &mut self.nodes[id];
            node.red += red;
            node.green += green;
            node.blue += blue;
            node.pixel_count += pixel_count;
            self.free.push(child);
            merged += 1;
        }

        self.nodes[id].is_leaf = true;
        self.leaf_count = self.leaf_count + 1 - merged;
        self.previous = None;
        trace!(
            "octree: collapsed level {} node, merged {} children, {} leaves",
            level, merged, self.leaf_count
        );
        true
    }

    /// Reduce until at most `target` leaves remain, then number the leaves.
    ///
    /// Leaves are numbered by an in-order walk (child 0 before child 7) and
    /// the returned palette holds each leaf's averaged color at its index.
    /// If the tree cannot be reduced as far as `target` (a single root leaf
    /// with `target == 0`), the remaining leaves are numbered anyway.
    pub fn build_palette(&mut self, target: usize) -> Vec<u32> {
        let before = self.leaf_count;
        let mut reductions = 0usize;
        while self.leaf_count > target && self.reduce() {
            reductions += 1;
        }

        let mut palette = Vec::with_capacity(self.leaf_count);
        self.assign_palette(ROOT, &mut palette);

        debug!(
            "octree: {} reductions took {} leaves to {}, palette of {}",
            reductions,
            before,
            self.leaf_count,
            palette.len()
        );
        palette
    }

    fn assign_palette(&mut self, id: NodeId, palette: &mut Vec<u32>) {
        let node = &mut self.nodes[id];
        if node.is_leaf {
            if node.pixel_count > 0 {
                node.palette_index = palette.len();
                palette.push(node.average());
            }
            return;
        }

        let children = node.children;
        for child in children.into_iter().flatten() {
            self.assign_palette(child, palette);
        }
    }

    /// Palette index of the leaf `pixel` descends to.
    ///
    /// Meaningful after [`build_palette`](Self::build_palette). A color whose
    /// branch was never created maps to index 0.
    pub fn palette_index(&self, pixel: u32) -> usize {
        let mut node = &self.nodes[ROOT];
        let mut level = 0;
        while !node.is_leaf {
            match node.children[child_index(pixel, level)] {
                Some(child) => node = &self.nodes[child],
                None => return 0,
            }
            level += 1;
        }
        node.palette_index
    }

    /// Statistics of every leaf, in palette order.
    pub fn leaf_stats(&self) -> Vec<LeafStats> {
        let mut stats = Vec::with_capacity(self.leaf_count);
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf {
                stats.push(LeafStats {
                    pixel_count: node.pixel_count,
                    color: node.average(),
                });
            } else {
                // Reversed so child 0 is visited first
                stack.extend(node.children.iter().rev().flatten());
            }
        }
        stats
    }

    /// Total pixels filed under all leaves.
    pub fn leaf_pixel_count(&self) -> u64 {
        let mut total = 0;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf {
                total += node.pixel_count;
            } else {
                stack.extend(node.children.iter().flatten());
            }
        }
        total
    }
}
