use std::rc::Rc;
use yew::Reducible;

pub const COPY_ICON: &str = "fas fa-copy";
pub const COPIED_ICON: &str = "fas fa-check";

/// Copy button overlaid on a code block.
///
/// Each successful copy carries a fresh token; a revert only applies to the
/// copy that scheduled it, so a second click restarts the confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyButton {
    hovered: bool,
    copied: bool,
    token: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyAction {
    Hover(bool),
    Copied(u32),
    Revert(u32),
}

impl CopyButton {
    pub fn icon(&self) -> &'static str {
        if self.copied {
            COPIED_ICON
        } else {
            COPY_ICON
        }
    }

    pub fn opacity(&self) -> &'static str {
        if self.hovered {
            "1"
        } else {
            "0"
        }
    }

    pub fn apply(self, action: CopyAction) -> Self {
        match action {
            CopyAction::Hover(hovered) => Self { hovered, ..self },
            CopyAction::Copied(token) => Self {
                copied: true,
                token,
                ..self
            },
            CopyAction::Revert(token) if token == self.token => Self {
                copied: false,
                ..self
            },
            CopyAction::Revert(_) => self,
        }
    }
}

impl Reducible for CopyButton {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_hovered() {
        let button = CopyButton::default();
        assert_eq!(button.opacity(), "0");
        assert_eq!(button.apply(CopyAction::Hover(true)).opacity(), "1");
    }

    #[test]
    fn copy_then_revert_restores_icon() {
        let copied = CopyButton::default().apply(CopyAction::Copied(1));
        assert_eq!(copied.icon(), COPIED_ICON);
        assert_eq!(copied.apply(CopyAction::Revert(1)).icon(), COPY_ICON);
    }

    #[test]
    fn stale_revert_does_not_cut_second_copy_short() {
        let second = CopyButton::default()
            .apply(CopyAction::Copied(1))
            .apply(CopyAction::Copied(2));
        let after_stale = second.apply(CopyAction::Revert(1));
        assert_eq!(after_stale.icon(), COPIED_ICON);
        assert_eq!(after_stale.apply(CopyAction::Revert(2)).icon(), COPY_ICON);
    }
}
