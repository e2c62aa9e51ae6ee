//! Navigation Header Component
//!
//! Site title with links to the other pages; the current page is
//! highlighted.

use dioxus::prelude::*;
use xplore_ui::{Biome, SiteHeader};

use crate::app::Route;
use crate::context::use_catalog;

/// Navigation location within the site
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Events,
    Links,
    Showcase,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Home,
        NavLocation::Events,
        NavLocation::Links,
        NavLocation::Showcase,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Events => "Events",
            NavLocation::Links => "Register",
            NavLocation::Showcase => "Showcase",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::Events => Route::Events {},
            NavLocation::Links => Route::Links {},
            NavLocation::Showcase => Route::Showcase {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the site
    pub current: NavLocation,
    #[props(default)]
    pub biome: Biome,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let catalog = use_catalog();
    let status = format!("{} events", catalog.len());

    rsx! {
        SiteHeader {
            title: catalog.name().to_string(),
            biome: props.biome,
            status: status,
            nav: rsx! {
                for location in NavLocation::ALL {
                    Link {
                        key: "{location.display_name()}",
                        to: location.route(),
                        class: if location == props.current { "nav-link nav-link--active" } else { "nav-link" },
                        "{location.display_name()}"
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_location_has_its_own_route() {
        let routes: Vec<String> = NavLocation::ALL.iter().map(|l| l.route().to_string()).collect();
        assert_eq!(routes, vec!["/", "/events", "/links", "/showcase"]);
    }
}
