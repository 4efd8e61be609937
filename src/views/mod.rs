//! Stateful views over a [`DataClient`](crate::client::DataClient). Each view
//! owns the collections it loaded and reloads them explicitly after every
//! successful mutation. A failed call returns the error and leaves the
//! loaded state as it was.

pub mod categories;
pub mod dashboard;
pub mod profile;

pub use categories::CategoriesView;
pub use dashboard::Dashboard;
pub use profile::ProfileView;

use crate::error::TaskflowError;

/// Find one item by full id, or else by unique id prefix.
pub(crate) fn resolve_ref<'a, T>(
    items: &'a [T],
    reference: &str,
    id_of: impl Fn(&T) -> &str,
    label_of: impl Fn(&T) -> String,
    not_found: impl FnOnce(&str) -> TaskflowError,
) -> Result<&'a T, TaskflowError> {
    if let Some(exact) = items.iter().find(|item| id_of(item) == reference) {
        return Ok(exact);
    }
    let matches: Vec<&T> = items
        .iter()
        .filter(|item| !reference.is_empty() && id_of(item).starts_with(reference))
        .collect();
    match matches.as_slice() {
        [] => Err(not_found(reference)),
        [only] => Ok(*only),
        many => {
            let candidates: Vec<String> = many.iter().map(|item| label_of(item)).collect();
            Err(TaskflowError::ambiguous_ref(reference, &candidates))
        }
    }
}
