use api::UserProfile;
use dioxus::prelude::*;

use crate::auth::{sign_out, use_auth};
use crate::icons::{
    FaAppleWhole, FaChartLine, FaChartPie, FaClockRotateLeft, FaHeartPulse,
    FaRightFromBracket, FaUser,
};
use crate::screen::Screen;
use crate::Icon;

#[component]
fn ScreenIcon(screen: Screen) -> Element {
    match screen {
        Screen::Dashboard => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        Screen::Prediction => rsx! { Icon { icon: FaHeartPulse, width: 16, height: 16 } },
        Screen::Recommendation => rsx! { Icon { icon: FaAppleWhole, width: 16, height: 16 } },
        Screen::Summary => rsx! { Icon { icon: FaChartPie, width: 16, height: 16 } },
        Screen::History => rsx! { Icon { icon: FaClockRotateLeft, width: 16, height: 16 } },
        Screen::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}

/// Navigation drawer: user header, one entry per [`Screen`], logout.
#[component]
pub fn Drawer(
    active: Screen,
    user: Option<UserProfile>,
    on_select: EventHandler<Screen>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        nav {
            class: "drawer",

            div {
                class: "drawer-user",
                if let Some(ref u) = user {
                    span { class: "drawer-avatar", "{u.initial()}" }
                    div {
                        class: "drawer-user-text",
                        span { class: "drawer-user-name", "{u.name}" }
                        span { class: "drawer-user-email", "{u.email}" }
                    }
                } else {
                    span { class: "drawer-user-name", "Diabetes Risk" }
                }
            }

            div {
                class: "drawer-items",
                for screen in Screen::DRAWER {
                    button {
                        key: "{screen.path()}",
                        class: if screen == active { "drawer-item active" } else { "drawer-item" },
                        onclick: move |_| on_select.call(screen),
                        ScreenIcon { screen }
                        span { "{screen.label()}" }
                    }
                }
            }

            div {
                class: "drawer-bottom",
                LogoutItem { on_logout }
            }
        }
    }
}

#[component]
fn LogoutItem(on_logout: EventHandler<()>) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "drawer-item",
            onclick: move |_| async move {
                sign_out(auth).await;
                on_logout.call(());
            },
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            span { "Log out" }
        }
    }
}
