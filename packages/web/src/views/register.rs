use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
