//! Accepters: named sub-operations a caller may request for a document.

use serde::{Deserialize, Serialize};

use crate::constants::ACCEPTER_ALL;
use crate::impl_exact_name_conversions;

/// Supported accepters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accepter {
    /// Line items of the accounting document.
    Item,
}

impl_exact_name_conversions!(Accepter {
    Item => "Item",
});

impl Accepter {
    /// Every accepter this build can dispatch, in dispatch order.
    pub const ALL: &'static [Self] = &[Self::Item];
}

/// Expand the requested accepter names into the accepters to dispatch.
///
/// An empty list, or a list whose first entry is `"All"`, selects every
/// supported accepter. Otherwise names are matched exactly; unknown names are
/// dropped and repeated names are dispatched once, in first-seen order.
#[must_use]
pub fn resolve_accepters<S: AsRef<str>>(names: &[S]) -> Vec<Accepter> {
    match names.first() {
        None => return Accepter::ALL.to_vec(),
        Some(first) if first.as_ref() == ACCEPTER_ALL => return Accepter::ALL.to_vec(),
        Some(_) => {}
    }

    let mut resolved = Vec::with_capacity(names.len());
    for accepter in names.iter().filter_map(|name| name.as_ref().parse::<Accepter>().ok()) {
        if !resolved.contains(&accepter) {
            resolved.push(accepter);
        }
    }
    resolved
}

/// Requested names that do not correspond to any supported accepter.
///
/// `"All"` in the leading position is an expansion marker, not an unknown
/// name.
#[must_use]
pub fn unrecognized_accepters<S: AsRef<str>>(names: &[S]) -> Vec<&str> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| (idx, name.as_ref()))
        .filter(|(idx, name)| !(*idx == 0 && *name == ACCEPTER_ALL))
        .filter(|(_, name)| name.parse::<Accepter>().is_err())
        .map(|(_, name)| name)
        .collect()
}
