// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary drained by [`Scene::commit`](crate::Scene::commit).

use alloc::vec::Vec;

use crate::types::NodeId;

/// Elements mutated since the previous commit, in first-mutation order.
///
/// Hosts use this to limit re-rendering: only these elements changed structure, classes,
/// bounds or inline style. Removed elements are not reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Damage {
    /// Mutated elements, each listed once.
    pub dirty: Vec<NodeId>,
}

impl Damage {
    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Returns true if `id` was mutated.
    pub fn contains(&self, id: NodeId) -> bool {
        self.dirty.contains(&id)
    }

    pub(crate) fn mark(&mut self, id: NodeId) {
        if !self.dirty.contains(&id) {
            self.dirty.push(id);
        }
    }
}
