use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;
use yew::prelude::*;

use crate::dom;

/// Pages that have their own rendered content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Contact,
    Terms,
    Privacy,
    Refund,
}

impl Page {
    #[cfg(test)]
    pub const ALL: [Page; 5] = [Page::Home, Page::Contact, Page::Terms, Page::Privacy, Page::Refund];

    pub fn identifier(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Contact => "contact",
            Page::Terms => "terms",
            Page::Privacy => "privacy",
            Page::Refund => "refund",
        }
    }
}

/// Sections of the home page reachable by their own identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Services,
    Portfolio,
    Testimonials,
}

impl Section {
    #[cfg(test)]
    pub const ALL: [Section; 3] = [Section::Services, Section::Portfolio, Section::Testimonials];

    /// DOM id of the section on the home page.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::Testimonials => "testimonials",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Page(Page),
    Section(Section),
}

impl NavTarget {
    pub const HOME: NavTarget = NavTarget::Page(Page::Home);

    pub fn identifier(self) -> &'static str {
        match self {
            NavTarget::Page(page) => page.identifier(),
            NavTarget::Section(section) => section.anchor(),
        }
    }

    /// Sections always render the home page and ask for a scroll once it is mounted.
    pub fn resolve(self) -> Resolution {
        match self {
            NavTarget::Page(page) => Resolution { page, scroll_to: None },
            NavTarget::Section(section) => Resolution {
                page: Page::Home,
                scroll_to: Some(section),
            },
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page identifier `{0}`")]
pub struct UnknownPage(pub String);

impl FromStr for NavTarget {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = match s {
            "home" => NavTarget::Page(Page::Home),
            "contact" => NavTarget::Page(Page::Contact),
            "terms" => NavTarget::Page(Page::Terms),
            "privacy" => NavTarget::Page(Page::Privacy),
            "refund" => NavTarget::Page(Page::Refund),
            "services" => NavTarget::Section(Section::Services),
            "portfolio" => NavTarget::Section(Section::Portfolio),
            "testimonials" => NavTarget::Section(Section::Testimonials),
            other => return Err(UnknownPage(other.to_string())),
        };
        Ok(target)
    }
}

/// What to show for a navigation request: the page, plus an optional section to reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub page: Page,
    pub scroll_to: Option<Section>,
}

impl Resolution {
    pub const HOME: Resolution = Resolution {
        page: Page::Home,
        scroll_to: None,
    };
}

/// Total mapping from a raw identifier to what gets rendered. Unknown
/// identifiers fall back to the home page; an empty one is just "no preference".
pub fn resolve(identifier: &str) -> Resolution {
    match identifier.parse::<NavTarget>() {
        Ok(target) => target.resolve(),
        Err(err) => {
            if !identifier.is_empty() {
                warn!("{}, falling back to home", err);
            }
            Resolution::HOME
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub page: Page,
    /// Section to reveal once the home page has rendered.
    pub pending_section: Option<Section>,
    /// Bumped on every navigation so late reveal notifications can be told apart.
    pub navigation_seq: u64,
}

impl SiteState {
    /// Initial state for a visit that arrives with `identifier` (e.g. a URL fragment).
    pub fn landing(identifier: &str) -> Self {
        let resolution = resolve(identifier);
        Self {
            page: resolution.page,
            pending_section: resolution.scroll_to,
            navigation_seq: 0,
        }
    }

    fn apply(&self, resolution: Resolution) -> Self {
        Self {
            page: resolution.page,
            pending_section: resolution.scroll_to,
            navigation_seq: self.navigation_seq.wrapping_add(1),
        }
    }
}

pub enum SiteAction {
    Navigate(NavTarget),
    /// The home page finished the scroll requested by navigation `seq`.
    SectionRevealed(u64),
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SiteAction::Navigate(target) => {
                debug!("Navigating to {}", target);
                Rc::new(self.apply(target.resolve()))
            }
            SiteAction::SectionRevealed(seq) => {
                if seq != self.navigation_seq || self.pending_section.is_none() {
                    return self;
                }
                Rc::new(SiteState {
                    pending_section: None,
                    ..(*self).clone()
                })
            }
        }
    }
}

pub type SiteContext = UseReducerHandle<SiteState>;

#[derive(Properties, PartialEq)]
pub struct SiteProviderProps {
    /// Identifier of the page to open first. Empty means home.
    #[prop_or_default]
    pub landing: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Owns the navigation state and hands it to every view below it.
#[function_component(SiteProvider)]
pub fn site_provider(props: &SiteProviderProps) -> Html {
    let landing = props.landing.clone();
    let state = use_reducer(move || SiteState::landing(&landing));

    html! {
        <ContextProvider<SiteContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<SiteContext>>
    }
}

/// Read-only snapshot of the navigation state.
#[hook]
pub fn use_site_state() -> SiteState {
    use_context::<SiteContext>()
        .map(|site| (*site).clone())
        .unwrap_or_default()
}

/// The navigate callback: updates the current page and resets the viewport to the top.
#[hook]
pub fn use_navigate() -> Callback<NavTarget> {
    let site = use_context::<SiteContext>();
    Callback::from(move |target: NavTarget| {
        match &site {
            Some(site) => site.dispatch(SiteAction::Navigate(target)),
            None => warn!("Navigation to {} requested outside of SiteProvider", target),
        }
        dom::scroll_to_top();
    })
}

/// Scrolls to the pending section after the calling component has rendered.
/// Meant for the page that owns the section anchors.
#[hook]
pub fn use_reveal_pending_section() {
    let site = use_context::<SiteContext>();
    let request = site
        .as_ref()
        .and_then(|site| site.pending_section.map(|section| (section, site.navigation_seq)));

    use_effect_with_deps(
        move |request| {
            if let (Some(site), Some((section, seq))) = (site, *request) {
                if dom::scroll_to_anchor(section.anchor()) {
                    debug!("Revealed #{} for navigation {}", section.anchor(), seq);
                }
                site.dispatch(SiteAction::SectionRevealed(seq));
            }
            || ()
        },
        request,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn navigate(state: SiteState, target: NavTarget) -> SiteState {
        (*Rc::new(state).reduce(SiteAction::Navigate(target))).clone()
    }

    #[test]
    fn every_identifier_maps_to_its_page() {
        let table = [
            ("home", Page::Home, None),
            ("services", Page::Home, Some(Section::Services)),
            ("portfolio", Page::Home, Some(Section::Portfolio)),
            ("testimonials", Page::Home, Some(Section::Testimonials)),
            ("contact", Page::Contact, None),
            ("terms", Page::Terms, None),
            ("privacy", Page::Privacy, None),
            ("refund", Page::Refund, None),
        ];
        for (id, page, scroll_to) in table {
            assert_eq!(resolve(id), Resolution { page, scroll_to }, "identifier {}", id);
        }
    }

    #[test]
    fn unknown_identifiers_fall_back_to_home() {
        for id in ["", "about", "HOME", "Terms", " contact", "blog"] {
            assert_eq!(resolve(id), Resolution::HOME, "identifier {:?}", id);
        }
    }

    #[test]
    fn parse_reports_the_unknown_identifier() {
        let err = "pricing".parse::<NavTarget>().unwrap_err();
        assert_eq!(err, UnknownPage("pricing".to_string()));
        assert_eq!(err.to_string(), "unknown page identifier `pricing`");
    }

    #[test]
    fn identifiers_parse_back_to_the_same_target() {
        let targets = Page::ALL
            .into_iter()
            .map(NavTarget::Page)
            .chain(Section::ALL.into_iter().map(NavTarget::Section));
        for target in targets {
            assert_eq!(target.identifier().parse::<NavTarget>(), Ok(target));
        }
    }

    #[test]
    fn starts_on_home() {
        let state = SiteState::default();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.pending_section, None);
    }

    #[test]
    fn navigating_to_a_page_shows_it() {
        let state = navigate(SiteState::default(), NavTarget::Page(Page::Contact));
        assert_eq!(state.page, Page::Contact);
        assert_eq!(state.pending_section, None);
        assert_eq!(state.navigation_seq, 1);
    }

    #[test]
    fn navigating_to_a_section_rewrites_to_home() {
        let state = SiteState {
            page: Page::Terms,
            ..SiteState::default()
        };
        let state = navigate(state, NavTarget::Section(Section::Services));
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.pending_section, Some(Section::Services));
    }

    #[test]
    fn leaving_before_the_reveal_cancels_it() {
        let state = navigate(SiteState::default(), NavTarget::Section(Section::Portfolio));
        let state = navigate(state, NavTarget::Page(Page::Privacy));
        assert_eq!(state.page, Page::Privacy);
        assert_eq!(state.pending_section, None);
    }

    #[test]
    fn reveal_clears_the_matching_request() {
        let state = navigate(SiteState::default(), NavTarget::Section(Section::Testimonials));
        let seq = state.navigation_seq;
        let state = Rc::new(state).reduce(SiteAction::SectionRevealed(seq));
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.pending_section, None);
        assert_eq!(state.navigation_seq, seq);
    }

    #[test]
    fn stale_reveal_is_ignored() {
        let first = navigate(SiteState::default(), NavTarget::Section(Section::Services));
        let stale_seq = first.navigation_seq;
        let second = navigate(first, NavTarget::Section(Section::Portfolio));
        let after = Rc::new(second.clone()).reduce(SiteAction::SectionRevealed(stale_seq));
        assert_eq!(*after, second);
    }

    #[test]
    fn landing_on_a_section_requests_a_reveal() {
        let state = SiteState::landing("portfolio");
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.pending_section, Some(Section::Portfolio));

        assert_eq!(SiteState::landing("refund").page, Page::Refund);
        assert_eq!(SiteState::landing("nonsense"), SiteState::default());
    }
}
