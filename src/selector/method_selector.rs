use std::collections::HashMap;

use tracing::debug;

use crate::page_object::page_object_model::{PageObjectMethod, PageObjectModel};

/// Picks one method per transition of a screen path.
pub trait MethodSelector {
    /// Transitions with no matching method contribute nothing; the result is
    /// empty when no method can be selected at all.
    fn select_methods<'a>(
        &self,
        model: &'a PageObjectModel,
        path: &[String],
    ) -> Vec<&'a PageObjectMethod>;
}

/// Walks `path`, asking `pick` for a method for every `(src, dst)` pair.
///
/// The terminal screen is paired with itself. If the last selected method
/// is a self-transition on the terminal screen it is dropped: it stands for
/// a trailing return that never leads anywhere.
fn select_along<'a>(
    path: &[String],
    mut pick: impl FnMut(&str, &str) -> Option<&'a PageObjectMethod>,
) -> Vec<&'a PageObjectMethod> {
    let mut selected = Vec::new();

    for (i, src) in path.iter().enumerate() {
        let dst = path.get(i + 1).unwrap_or(src);
        match pick(src.as_str(), dst.as_str()) {
            Some(method) => selected.push(method),
            None => debug!(from = %src, to = %dst, "no method for transition, skipping"),
        }
    }

    let drop_trailing = match (selected.last(), path.last()) {
        (Some(last), Some(terminal)) => {
            last.is_self_transition() && &last.page_object_id == terminal
        }
        _ => false,
    };
    if drop_trailing {
        selected.pop();
    }

    selected
}

// ============================================================================
// Representative selection
// ============================================================================

/// Uses the first method of the source page that returns to the destination.
pub struct RepresentativeMethodSelector;

impl MethodSelector for RepresentativeMethodSelector {
    fn select_methods<'a>(
        &self,
        model: &'a PageObjectModel,
        path: &[String],
    ) -> Vec<&'a PageObjectMethod> {
        select_along(path, |src, dst| {
            model
                .get(src)?
                .methods
                .iter()
                .find(|m| m.return_page_object_id == dst)
        })
    }
}

// ============================================================================
// Unique selection
// ============================================================================

/// Methods still available for selection, per source page.
///
/// Owned by a single `select_methods` call, so selections never leak
/// between paths.
pub struct MethodPool<'a> {
    pools: HashMap<&'a str, Vec<&'a PageObjectMethod>>,
}

impl<'a> MethodPool<'a> {
    pub fn new(model: &'a PageObjectModel) -> Self {
        let pools = model
            .page_objects()
            .iter()
            .map(|po| (po.id.as_str(), po.methods.iter().collect()))
            .collect();
        Self { pools }
    }

    /// Remove and return the first remaining method of `src` leading to `dst`.
    pub fn take(&mut self, src: &str, dst: &str) -> Option<&'a PageObjectMethod> {
        let pool = self.pools.get_mut(src)?;
        let position = pool.iter().position(|m| m.return_page_object_id == dst)?;
        Some(pool.remove(position))
    }

    pub fn remaining(&self, src: &str) -> usize {
        self.pools.get(src).map_or(0, Vec::len)
    }
}

/// Like `RepresentativeMethodSelector`, but never hands out the same method
/// twice within one path.
pub struct UniqueMethodSelector;

impl MethodSelector for UniqueMethodSelector {
    fn select_methods<'a>(
        &self,
        model: &'a PageObjectModel,
        path: &[String],
    ) -> Vec<&'a PageObjectMethod> {
        let mut pool = MethodPool::new(model);
        select_along(path, |src, dst| pool.take(src, dst))
    }
}
