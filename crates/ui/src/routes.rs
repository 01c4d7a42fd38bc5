use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CountriesView, HomeView, SettingsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/countries", CountriesView)] Countries {},
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Wander" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Countries {}, "Destinations" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}
