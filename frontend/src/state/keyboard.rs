#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl+K / Cmd+K: move focus to the first navigation link.
    FocusNavigation,
    CloseMenu,
}

pub fn shortcut_for(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    match key {
        "Escape" => Some(Shortcut::CloseMenu),
        "k" if ctrl || meta => Some(Shortcut::FocusNavigation),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_needs_a_modifier() {
        assert_eq!(shortcut_for("k", true, false), Some(Shortcut::FocusNavigation));
        assert_eq!(shortcut_for("k", false, true), Some(Shortcut::FocusNavigation));
        assert_eq!(shortcut_for("k", false, false), None);
    }

    #[test]
    fn escape_closes_with_or_without_modifiers() {
        assert_eq!(shortcut_for("Escape", false, false), Some(Shortcut::CloseMenu));
        assert_eq!(shortcut_for("Escape", true, false), Some(Shortcut::CloseMenu));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(shortcut_for("Enter", true, true), None);
        assert_eq!(shortcut_for("K", true, false), None);
    }
}
