//! Key bindings shown in the footer and the help overlay.

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingId {
    FocusSearch,
    ClearQuery,
    BrowseAll,
    ToggleTheme,
    CopyStatement,
    CopyPath,
    SwitchFocus,
    Navigate,
    Help,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub id: BindingId,
    pub keys: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

/// Every binding, for the help overlay.
pub fn all_bindings() -> Vec<Binding> {
    vec![
        Binding {
            id: BindingId::FocusSearch,
            keys: "Ctrl+K",
            label: "search",
            hint: "Focus the search box from anywhere",
        },
        Binding {
            id: BindingId::ClearQuery,
            keys: "Esc Esc",
            label: "clear",
            hint: "Clear the query and leave the search box",
        },
        Binding {
            id: BindingId::BrowseAll,
            keys: "Ctrl+A",
            label: "browse all",
            hint: "Show or hide every icon (query must be empty)",
        },
        Binding {
            id: BindingId::ToggleTheme,
            keys: "Ctrl+T",
            label: "theme",
            hint: "Switch between light and dark",
        },
        Binding {
            id: BindingId::CopyStatement,
            keys: "Enter/y",
            label: "copy import",
            hint: "Copy `from module import Class`",
        },
        Binding {
            id: BindingId::CopyPath,
            keys: "Y",
            label: "copy path",
            hint: "Copy the dotted import path",
        },
        Binding {
            id: BindingId::SwitchFocus,
            keys: "Tab",
            label: "focus",
            hint: "Switch between search box and results",
        },
        Binding {
            id: BindingId::Navigate,
            keys: "j/k g/G",
            label: "move",
            hint: "Down / up, top / bottom (also arrows, PgUp/PgDn)",
        },
        Binding {
            id: BindingId::Help,
            keys: "?",
            label: "help",
            hint: "Toggle this help (from results)",
        },
        Binding {
            id: BindingId::Quit,
            keys: "Ctrl+C",
            label: "quit",
            hint: "Exit (also q from results)",
        },
    ]
}

/// Bindings that do something in the current state.
pub fn available_bindings(app: &AppState) -> Vec<Binding> {
    let has_selection = app.selected_record().is_some();
    let results_focused = app.search.is_results_focused();

    all_bindings()
        .into_iter()
        .filter_map(|binding| match binding.id {
            BindingId::BrowseAll if !app.browse_toggle_visible() => None,
            BindingId::BrowseAll => Some(Binding {
                label: if app.search.show_all {
                    "hide all"
                } else {
                    "browse all"
                },
                ..binding
            }),
            BindingId::ClearQuery if app.search.query().is_empty() => None,
            BindingId::CopyStatement | BindingId::CopyPath if !has_selection => None,
            BindingId::CopyPath if !results_focused => None,
            BindingId::Navigate | BindingId::Help if !results_focused => None,
            _ => Some(binding),
        })
        .collect()
}
