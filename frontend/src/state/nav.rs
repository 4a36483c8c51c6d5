use std::rc::Rc;
use yew::Reducible;

/// Open/closed flag of the mobile navigation menu.
///
/// The flag is the single source for the `active` class on both the
/// hamburger button and the menu, and for the body scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Hamburger button activated.
    Toggle,
    /// Menu link selected or escape pressed.
    Close,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn close(self) -> Self {
        Self { open: false }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Toggle => self.toggle(),
            NavAction::Close => self.close(),
        }
    }

    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn action() -> impl Strategy<Value = NavAction> {
        prop_oneof![Just(NavAction::Toggle), Just(NavAction::Close)]
    }

    #[test]
    fn starts_closed() {
        let menu = NavMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.active_class(), None);
    }

    #[test]
    fn toggle_reflects_active_class() {
        let menu = NavMenu::default().toggle();
        assert!(menu.is_open());
        assert_eq!(menu.active_class(), Some("active"));
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let menu = Rc::new(NavMenu::default());
        let next = menu.clone().reduce(NavAction::Close);
        assert!(Rc::ptr_eq(&menu, &next));
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_state(history in proptest::collection::vec(action(), 0..16)) {
            let menu = history.into_iter().fold(NavMenu::default(), NavMenu::apply);
            prop_assert_eq!(menu.toggle().toggle(), menu);
        }

        #[test]
        fn close_always_leaves_menu_closed(history in proptest::collection::vec(action(), 0..16)) {
            let menu = history.into_iter().fold(NavMenu::default(), NavMenu::apply);
            prop_assert!(!menu.apply(NavAction::Close).is_open());
        }
    }
}
