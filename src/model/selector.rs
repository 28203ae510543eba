//! Location and zone selector options.
//!
//! The option lists are external data (configured, not fetched). A selector
//! cycles through `All` followed by each option; `All` clears the filter.

use serde::Deserialize;

/// One selectable id with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectorOption {
    /// Value sent as the query parameter.
    pub id: String,
    /// Label shown in the selector.
    pub name: String,
}

impl SelectorOption {
    /// Build an option.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Direction for cycling a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Towards the end of the list, wrapping to `All`.
    Forward,
    /// Towards `All`, wrapping to the last option.
    Backward,
}

/// The id after `current` when cycling `options` in `direction`.
///
/// Positions are `All` (returned as `None`) then each option in order.
/// An id not present in `options` is treated as sitting on `All`.
pub fn cycle_selection(
    options: &[SelectorOption],
    current: Option<&str>,
    direction: Cycle,
) -> Option<String> {
    if options.is_empty() {
        return None;
    }

    // Position 0 is "All", position i + 1 is options[i].
    let positions = options.len() + 1;
    let position = current
        .and_then(|id| options.iter().position(|opt| opt.id == id))
        .map_or(0, |index| index + 1);

    let next = match direction {
        Cycle::Forward => (position + 1) % positions,
        Cycle::Backward => (position + positions - 1) % positions,
    };

    next.checked_sub(1).map(|index| options[index].id.clone())
}

/// Label to display for `current`: the option name, the raw id when unknown,
/// or `All`.
pub fn selection_label<'a>(options: &'a [SelectorOption], current: Option<&'a str>) -> &'a str {
    match current {
        None => "All",
        Some(id) => options
            .iter()
            .find(|opt| opt.id == id)
            .map_or(id, |opt| opt.name.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SelectorOption> {
        vec![
            SelectorOption::new("n", "North"),
            SelectorOption::new("s", "South"),
        ]
    }

    #[test]
    fn forward_walks_all_then_options_then_wraps() {
        let opts = options();
        let first = cycle_selection(&opts, None, Cycle::Forward);
        assert_eq!(first.as_deref(), Some("n"));
        let second = cycle_selection(&opts, first.as_deref(), Cycle::Forward);
        assert_eq!(second.as_deref(), Some("s"));
        let wrapped = cycle_selection(&opts, second.as_deref(), Cycle::Forward);
        assert_eq!(wrapped, None);
    }

    #[test]
    fn backward_from_all_goes_to_last_option() {
        let opts = options();
        assert_eq!(
            cycle_selection(&opts, None, Cycle::Backward).as_deref(),
            Some("s")
        );
        assert_eq!(cycle_selection(&opts, Some("n"), Cycle::Backward), None);
    }

    #[test]
    fn unknown_id_cycles_from_all() {
        let opts = options();
        assert_eq!(
            cycle_selection(&opts, Some("ghost"), Cycle::Forward).as_deref(),
            Some("n")
        );
    }

    #[test]
    fn empty_options_always_select_all() {
        assert_eq!(cycle_selection(&[], Some("n"), Cycle::Forward), None);
    }

    #[test]
    fn label_prefers_option_name() {
        let opts = options();
        assert_eq!(selection_label(&opts, None), "All");
        assert_eq!(selection_label(&opts, Some("s")), "South");
        assert_eq!(selection_label(&opts, Some("ghost")), "ghost");
    }
}
