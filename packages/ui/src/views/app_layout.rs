use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::drawer::Drawer;
use crate::icons::FaBars;
use crate::screen::Screen;
use crate::Icon;

/// Signed-in chrome: drawer plus a header with the screen title.
///
/// Platform packages pass the active screen, navigation callbacks, and the
/// screen body (an `Outlet` on web/desktop) as children. The drawer collapses
/// behind the menu button on narrow screens.
#[component]
pub fn AppLayoutView(
    active: Screen,
    on_navigate: EventHandler<Screen>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();
    let mut drawer_open = use_signal(|| false);

    rsx! {
        div {
            class: if drawer_open() { "app-shell drawer-open" } else { "app-shell" },

            Drawer {
                active,
                user: auth().user,
                on_select: move |screen| {
                    drawer_open.set(false);
                    on_navigate.call(screen);
                },
                on_logout: move |_| {
                    drawer_open.set(false);
                    on_logout.call(());
                },
            }

            if drawer_open() {
                div { class: "drawer-scrim", onclick: move |_| drawer_open.set(false) }
            }

            main {
                class: "app-main",
                header {
                    class: "app-header",
                    button {
                        class: "menu-button",
                        title: "Menu",
                        onclick: move |_| drawer_open.set(!drawer_open()),
                        Icon { icon: FaBars, width: 18, height: 18 }
                    }
                    div {
                        class: "app-header-text",
                        h1 { "{active.title()}" }
                        p { "{active.description()}" }
                    }
                }
                div { class: "app-content", {children} }
            }
        }
    }
}

/// Centered card used by the signed-out screens.
#[component]
pub fn AuthCard(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div { class: "auth-brand", "Diabetes Risk" }
                h1 { class: "auth-title", "{title}" }
                p { class: "auth-subtitle", "{subtitle}" }
                {children}
            }
        }
    }
}
