use dioxus::prelude::*;
use crate::backend::recruitment::favorite_profile_ids;
use crate::Route;

#[component]
pub fn NavComponent() -> Element {
    let app_state = use_context::<crate::components::AppState>();
    let backend_ready = *app_state.backend_ready.read();
    let favorite_count = favorite_profile_ids(&app_state.action_history.read()).len();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container",
                    // Logo section
                    div { class: "nav-logo",
                        div { class: "logo-icon" }
                        span { class: "logo-text", "Recruitment" }
                        if !backend_ready {
                            span { class: "badge ml-2", "Connecting…" }
                        }
                    }

                    // Navigation links
                    div { class: "nav-links",
                        Link {
                            to: Route::RecruitmentComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Candidates"
                        }
                        Link {
                            to: Route::FavoritesComponent {},
                            class: "nav-link",
                            active_class: "active",
                            "Favorites"
                            if favorite_count > 0 {
                                span { class: "badge ml-2", "{favorite_count}" }
                            }
                        }
                    }
                }
            }

            div { class: "fixed-header-spacer" }

            div { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}
