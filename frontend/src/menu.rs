use std::rc::Rc;

use yew::Reducible;

use crate::config::MOBILE_BREAKPOINT;

/// Open/closed state of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    MobileOpen,
    MegaOpen,
    Both,
}

/// Where a document-level click landed, relative to the menu parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub in_nav: bool,
    pub on_mobile_toggle: bool,
    pub in_mega_menu: bool,
    pub on_mega_trigger: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuAction {
    ToggleMobile,
    /// A top-level nav link other than the "more links" trigger.
    NavLinkClicked { viewport_width: f64 },
    DocumentClicked(ClickTarget),
    ToggleMega,
    MegaLinkClicked { viewport_width: f64 },
    Resized,
}

fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

impl MenuState {
    fn from_flags(mobile_open: bool, mega_open: bool) -> Self {
        match (mobile_open, mega_open) {
            (false, false) => MenuState::Closed,
            (true, false) => MenuState::MobileOpen,
            (false, true) => MenuState::MegaOpen,
            (true, true) => MenuState::Both,
        }
    }

    pub fn mobile_open(self) -> bool {
        matches!(self, MenuState::MobileOpen | MenuState::Both)
    }

    pub fn mega_open(self) -> bool {
        matches!(self, MenuState::MegaOpen | MenuState::Both)
    }

    pub fn apply(self, action: MenuAction) -> Self {
        let (mut mobile, mut mega) = (self.mobile_open(), self.mega_open());
        match action {
            MenuAction::ToggleMobile => mobile = !mobile,
            MenuAction::NavLinkClicked { viewport_width } => {
                if is_mobile(viewport_width) {
                    mobile = false;
                }
            }
            MenuAction::DocumentClicked(target) => {
                if mobile && !target.in_nav && !target.on_mobile_toggle {
                    mobile = false;
                }
                if mega && !target.in_mega_menu && !target.on_mega_trigger {
                    mega = false;
                }
            }
            MenuAction::ToggleMega => mega = !mega,
            MenuAction::MegaLinkClicked { viewport_width } => {
                mega = false;
                if is_mobile(viewport_width) {
                    mobile = false;
                }
            }
            MenuAction::Resized => {
                mobile = false;
                mega = false;
            }
        }
        Self::from_flags(mobile, mega)
    }

    /// Class attribute for the page header.
    pub fn header_class(self) -> &'static str {
        if self.mobile_open() {
            "header mobile-menu-active"
        } else {
            "header"
        }
    }

    /// Class attribute for the nav item that owns the mega-menu.
    pub fn mega_item_class(self) -> &'static str {
        if self.mega_open() {
            "mega-active"
        } else {
            ""
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            log::debug!("menu {:?} -> {:?} on {:?}", *self, next, action);
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL: [MenuState; 4] = [
        MenuState::Closed,
        MenuState::MobileOpen,
        MenuState::MegaOpen,
        MenuState::Both,
    ];

    #[test]
    fn toggles_flip_one_flag() {
        assert_eq!(MenuState::Closed.apply(MenuAction::ToggleMobile), MenuState::MobileOpen);
        assert_eq!(MenuState::MobileOpen.apply(MenuAction::ToggleMobile), MenuState::Closed);
        assert_eq!(MenuState::MobileOpen.apply(MenuAction::ToggleMega), MenuState::Both);
        assert_eq!(MenuState::Both.apply(MenuAction::ToggleMega), MenuState::MobileOpen);
    }

    #[test]
    fn nav_link_keeps_mobile_menu_on_wide_viewports() {
        for width in [768.0, 800.0, 1024.0, 1920.0] {
            for state in ALL {
                let next = state.apply(MenuAction::NavLinkClicked { viewport_width: width });
                assert_eq!(next, state, "width {width}");
            }
        }
    }

    #[test]
    fn nav_link_closes_mobile_menu_on_narrow_viewports() {
        for width in [0.0, 320.0, 767.0, 767.9] {
            for state in ALL {
                let next = state.apply(MenuAction::NavLinkClicked { viewport_width: width });
                assert!(!next.mobile_open(), "width {width}");
                assert_eq!(next.mega_open(), state.mega_open());
            }
        }
    }

    #[test]
    fn outside_click_closes_mobile_menu_inside_click_does_not() {
        let outside = ClickTarget::default();
        assert!(!MenuState::MobileOpen.apply(MenuAction::DocumentClicked(outside)).mobile_open());

        let in_nav = ClickTarget { in_nav: true, ..ClickTarget::default() };
        let on_toggle = ClickTarget { on_mobile_toggle: true, ..ClickTarget::default() };
        for target in [in_nav, on_toggle] {
            assert!(MenuState::MobileOpen.apply(MenuAction::DocumentClicked(target)).mobile_open());
        }
    }

    #[test]
    fn outside_click_closes_mega_menu_unless_on_menu_or_trigger() {
        let in_nav = ClickTarget { in_nav: true, ..ClickTarget::default() };
        assert_eq!(MenuState::MegaOpen.apply(MenuAction::DocumentClicked(in_nav)), MenuState::Closed);

        let in_mega = ClickTarget { in_nav: true, in_mega_menu: true, ..ClickTarget::default() };
        let on_trigger = ClickTarget { in_nav: true, on_mega_trigger: true, ..ClickTarget::default() };
        for target in [in_mega, on_trigger] {
            assert_eq!(MenuState::MegaOpen.apply(MenuAction::DocumentClicked(target)), MenuState::MegaOpen);
        }
    }

    #[test]
    fn mega_link_closes_mega_and_mobile_only_when_narrow() {
        let wide = MenuState::Both.apply(MenuAction::MegaLinkClicked { viewport_width: 1200.0 });
        assert_eq!(wide, MenuState::MobileOpen);

        let narrow = MenuState::Both.apply(MenuAction::MegaLinkClicked { viewport_width: 400.0 });
        assert_eq!(narrow, MenuState::Closed);
    }

    #[test]
    fn resize_always_closes_everything() {
        for state in ALL {
            let next = state.apply(MenuAction::Resized);
            assert_eq!(next, MenuState::Closed);
            assert_eq!(next.header_class(), "header");
            assert_eq!(next.mega_item_class(), "");
        }
    }

    #[test]
    fn classes_follow_state() {
        assert_eq!(MenuState::Both.header_class(), "header mobile-menu-active");
        assert_eq!(MenuState::Both.mega_item_class(), "mega-active");
        assert_eq!(MenuState::MegaOpen.header_class(), "header");
    }
}
