// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core scene implementation: structure, mutation, queries.

use alloc::vec::Vec;
use kurbo::{Affine, Point, Rect};

use crate::damage::Damage;
use crate::selector::Selector;
use crate::style::{Style, Transition};
use crate::types::{Element, ElementFlags, NodeId};

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Element tree standing in for a DOM subtree.
pub struct Scene {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    damage: Damage,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Scene")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("pending_damage", &self.damage.dirty.len())
            .finish_non_exhaustive()
    }
}

/// Results of a hit test.
#[derive(Clone, Debug)]
pub struct Hit {
    /// The matched element.
    pub node: NodeId,
    /// Path from root to element (inclusive).
    pub path: Vec<NodeId>,
}

/// Filters applied during hit testing.
///
/// Used by [`Scene::hit_test_point`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider elements marked [`ElementFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider elements marked [`ElementFlags::PICKABLE`].
    pub pickable_only: bool,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            damage: Damage::default(),
        }
    }

    /// Insert `element` as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let node = |generation| Node {
            generation,
            parent: None,
            children: Vec::new(),
            element,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(node(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(node(generation)));
            self.generations.push(generation);
            (self.nodes.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices."
        )]
        let id = NodeId::new(idx as u32, generation);
        self.damage.mark(id);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p, None);
        }
        id
    }

    /// Remove an element (and its subtree) from the scene.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        self.free_subtree(id);
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Element data for a live id.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node_opt(id).map(|n| &n.element)
    }

    /// Parent of a live id, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Children of a live id in document order; empty for stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Move `child` to the end of `parent`'s children.
    ///
    /// Returns false (and changes nothing) if either id is stale or `child` is `parent` or one
    /// of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.can_adopt(parent, child) {
            return false;
        }
        self.detach(child);
        self.link_parent(child, parent, None);
        true
    }

    /// Move `child` into `parent` immediately before `reference`.
    ///
    /// Returns false (and changes nothing) if `reference` is not a child of `parent`, or under
    /// the same conditions as [`Scene::append_child`].
    pub fn insert_before(&mut self, parent: NodeId, child: NodeId, reference: NodeId) -> bool {
        if child == reference
            || !self.can_adopt(parent, child)
            || self.parent(reference) != Some(parent)
        {
            return false;
        }
        self.detach(child);
        let pos = self.node(parent).children.iter().position(|c| *c == reference);
        self.link_parent(child, parent, pos);
        true
    }

    /// Copy `id` and its whole subtree. The copy is detached (a new root).
    pub fn deep_clone(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.node_opt(id)?;
        let element = node.element.clone();
        let children = node.children.clone();
        let copy = self.insert(None, element);
        for child in children {
            if let Some(c) = self.deep_clone(child) {
                self.link_parent(c, copy, None);
            }
        }
        Some(copy)
    }

    /// Update local bounds.
    pub fn set_local_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.local_bounds = bounds;
            self.damage.mark(id);
        }
    }

    /// Set the width of an element, keeping its origin and height.
    pub fn set_width(&mut self, id: NodeId, width: f64) {
        if let Some(n) = self.node_opt_mut(id) {
            let b = n.element.local_bounds;
            n.element.local_bounds = Rect::new(b.x0, b.y0, b.x0 + width, b.y1);
            self.damage.mark(id);
        }
    }

    /// Rendered width of an element (its local bounds width).
    pub fn client_width(&self, id: NodeId) -> Option<f64> {
        self.element(id).map(|e| e.local_bounds.width())
    }

    /// Inline style of an element.
    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.element(id).map(|e| &e.style)
    }

    /// Update the inline transform.
    pub fn set_transform(&mut self, id: NodeId, transform: Affine) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.style.transform = transform;
            self.damage.mark(id);
        }
    }

    /// Update the inline transition; `None` disables animation.
    pub fn set_transition(&mut self, id: NodeId, transition: Option<Transition>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.style.transition = transition;
            self.damage.mark(id);
        }
    }

    /// Update element flags.
    pub fn set_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.element.flags = flags;
            self.damage.mark(id);
        }
    }

    /// Add a class. Returns true if the class list changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        let changed = self
            .node_opt_mut(id)
            .is_some_and(|n| n.element.add_class(class));
        if changed {
            self.damage.mark(id);
        }
        changed
    }

    /// Remove a class. Returns true if the class list changed.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        let changed = self
            .node_opt_mut(id)
            .is_some_and(|n| n.element.remove_class(class));
        if changed {
            self.damage.mark(id);
        }
        changed
    }

    /// Returns true if a live element has `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// First element matching `selector` in document order.
    ///
    /// With `Some(scope)`, only descendants of `scope` are searched (not `scope` itself).
    /// With `None`, every root subtree is searched, roots included.
    pub fn query_selector(&self, scope: Option<NodeId>, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| selector.matches(&self.node(*id).element))
    }

    /// All elements matching `selector` in document order. Scoping as in [`Scene::query_selector`].
    pub fn query_selector_all(&self, scope: Option<NodeId>, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| selector.matches(&self.node(*id).element))
            .collect()
    }

    /// Lay `parent`'s children out left to right, each keeping its width and height.
    ///
    /// The first child starts at `x = 0`, `y = 0` in parent space.
    pub fn layout_row(&mut self, parent: NodeId) {
        let children = self.children(parent).to_vec();
        let mut x = 0.0;
        for child in children {
            let b = self.node(child).element.local_bounds;
            let (w, h) = (b.width(), b.height());
            self.set_local_bounds(child, Rect::new(x, 0.0, x + w, h));
            x += w;
        }
    }

    /// World transform of a live element: the product of inline transforms from the root down.
    pub fn world_transform(&self, id: NodeId) -> Option<Affine> {
        if !self.is_alive(id) {
            return None;
        }
        let tf = self
            .path_to_root(id)
            .iter()
            .fold(Affine::IDENTITY, |acc, n| {
                acc * self.node(*n).element.style.transform
            });
        Some(tf)
    }

    /// Hit test a world-space point. Returns the topmost element.
    ///
    /// Higher `z_index` wins; on equal z the element painted later (later in document order)
    /// wins. Elements whose bounds are empty never match.
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<Hit> {
        let mut best: Option<(NodeId, i32)> = None;
        let mut stack: Vec<(NodeId, Affine)> = self
            .roots()
            .into_iter()
            .rev()
            .map(|r| (r, Affine::IDENTITY))
            .collect();
        while let Some((id, parent_tf)) = stack.pop() {
            let node = self.node(id);
            let world_tf = parent_tf * node.element.style.transform;
            for child in node.children.iter().rev() {
                stack.push((*child, world_tf));
            }
            let flags = node.element.flags;
            if filter.visible_only && !flags.contains(ElementFlags::VISIBLE) {
                continue;
            }
            if filter.pickable_only && !flags.contains(ElementFlags::PICKABLE) {
                continue;
            }
            if !transform_rect_bbox(world_tf, node.element.local_bounds).contains(pt) {
                continue;
            }
            let z = node.element.z_index;
            if best.is_none_or(|(_, z_best)| z >= z_best) {
                best = Some((id, z));
            }
        }
        best.map(|(node, _)| Hit {
            node,
            path: self.path_to_root(node),
        })
    }

    /// Drain the elements mutated since the previous commit.
    pub fn commit(&mut self) -> Damage {
        let mut damage = core::mem::take(&mut self.damage);
        damage.dirty.retain(|id| self.is_alive(*id));
        damage
    }

    // --- internals ---

    fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n {
                Some(n) if n.parent.is_none() =>
                {
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "NodeId uses 32-bit indices."
                    )]
                    Some(NodeId::new(i as u32, n.generation))
                }
                _ => None,
            })
            .collect()
    }

    /// Pre-order traversal below `scope` (exclusive), or of every root subtree (inclusive).
    fn descendants(&self, scope: Option<NodeId>) -> Vec<NodeId> {
        let mut stack: Vec<NodeId> = match scope {
            Some(s) => self.children(s).iter().rev().copied().collect(),
            None => self.roots().into_iter().rev().collect(),
        };
        let mut out = Vec::new();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn can_adopt(&self, parent: NodeId, child: NodeId) -> bool {
        self.is_alive(parent)
            && self.is_alive(child)
            && !self.path_to_root(parent).contains(&child)
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId, at: Option<usize>) {
        let parent_node = self.node_mut(parent);
        match at {
            Some(i) => parent_node.children.insert(i, id),
            None => parent_node.children.push(id),
        }
        self.node_mut(id).parent = Some(parent);
        self.damage.mark(parent);
        self.damage.mark(id);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
        self.damage.mark(parent);
    }

    fn path_to_root(&self, mut id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        loop {
            out.push(id);
            match self.node(id).parent {
                Some(p) => id = p,
                None => break,
            }
        }
        out.reverse();
        out
    }
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box in world space.
fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
