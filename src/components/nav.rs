use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{NavItem, NAV_ITEMS};
use crate::dom;
use crate::router::{use_navigate, use_site_state, NavTarget, Page};

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        Rc::new(MenuState { open })
    }
}

/// Mobile items navigate and then fold the menu away.
fn select_from_menu(
    navigate: Callback<NavTarget>,
    menu: UseReducerDispatcher<MenuState>,
    target: NavTarget,
) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        navigate.emit(target);
        menu.dispatch(MenuAction::Close);
    })
}

/// Section targets never match: the router has already turned them into `home`.
pub fn is_active(target: NavTarget, current: Page) -> bool {
    target == NavTarget::Page(current)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let site = use_site_state();
    let navigate = use_navigate();
    let menu = use_reducer(MenuState::default);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SHADOW_THRESHOLD_PX;

    let go_home = {
        let navigate = navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigate.emit(NavTarget::HOME);
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let book_call = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_bottom();
    });

    let item_class = |item: &NavItem| {
        classes!("nav-link", is_active(item.target, site.page).then(|| "active"))
    };

    let desktop_items = NAV_ITEMS
        .iter()
        .map(|item| {
            let navigate = navigate.clone();
            let target = item.target;
            html! {
                <button
                    key={item.target.identifier()}
                    class={item_class(item)}
                    onclick={Callback::from(move |_: MouseEvent| navigate.emit(target))}
                >
                    { item.label }
                </button>
            }
        })
        .collect::<Html>();

    let mobile_items = NAV_ITEMS
        .iter()
        .map(|item| {
            html! {
                <button
                    key={item.target.identifier()}
                    class={classes!(item_class(item), "mobile")}
                    onclick={select_from_menu(navigate.clone(), menu.dispatcher(), item.target)}
                >
                    { item.label }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go_home}>
                    {"Prime"}<span>{"Analytics"}</span>
                </a>

                <div class="nav-desktop">
                    { desktop_items }
                    <button class="primary-button" onclick={book_call.clone()}>
                        {"Book Discovery Call"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if menu.open { "✕" } else { "☰" } }
                </button>
            </div>

            if menu.open {
                <div class="nav-mobile">
                    { mobile_items }
                    <button class="primary-button wide" onclick={book_call}>
                        {"Book Discovery Call"}
                    </button>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #ffffff;
                    border-bottom: 1px solid #e5e7eb;
                    transition: box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    box-shadow: 0 4px 16px rgba(15, 58, 73, 0.08);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #0F3A49;
                    text-decoration: none;
                }

                .nav-logo span {
                    color: #4ECDC4;
                }

                .nav-desktop {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.9rem;
                    color: #4b5563;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #0F3A49;
                }

                .nav-link.active {
                    font-weight: 600;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #4b5563;
                    cursor: pointer;
                }

                .nav-mobile {
                    display: none;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid #e5e7eb;
                }

                .nav-link.mobile {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.5rem 0;
                }

                .primary-button.wide {
                    width: 100%;
                    margin-top: 1rem;
                }

                @media (max-width: 768px) {
                    .nav-desktop {
                        display: none;
                    }

                    .burger-menu,
                    .nav-mobile {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Section;
    use pretty_assertions::assert_eq;

    fn menu(open: bool, action: MenuAction) -> MenuState {
        *Rc::new(MenuState { open }).reduce(action)
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn toggling_twice_restores_the_menu() {
        for open in [false, true] {
            let once = menu(open, MenuAction::Toggle);
            assert_eq!(once.open, !open);
            assert_eq!(menu(once.open, MenuAction::Toggle).open, open);
        }
    }

    #[test]
    fn close_on_a_closed_menu_keeps_it_closed() {
        assert!(!menu(false, MenuAction::Close).open);
    }

    #[test]
    fn only_the_current_page_is_active() {
        for item in NAV_ITEMS {
            let expected = item.target == NavTarget::HOME;
            assert_eq!(is_active(item.target, Page::Home), expected, "{}", item.label);
        }
        assert!(is_active(NavTarget::Page(Page::Contact), Page::Contact));
    }

    #[test]
    fn section_items_never_light_up() {
        for page in Page::ALL {
            for section in Section::ALL {
                assert!(!is_active(NavTarget::Section(section), page));
            }
        }
    }
}
