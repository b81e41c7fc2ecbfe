use dioxus::prelude::*;
use crate::backend::recruitment::favorite_profile_ids;
use crate::components::recruitment_user_modal::RecruitmentUserModal;
use crate::components::SharedStore;

/// Trimmed lookup input, or `None` when there is nothing to open.
pub fn lookup_target(input: &str) -> Option<String> {
    let id = input.trim();
    (!id.is_empty()).then(|| id.to_string())
}

#[component]
pub fn RecruitmentComponent() -> Element {
    let mut query = use_signal(|| "".to_string());
    let mut selected = use_signal(|| None::<String>);

    let open_profile = move |_| {
        if let Some(id) = lookup_target(&query.read()) {
            selected.set(Some(id));
        }
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-8",
                h1 { class: "page-title", "Candidates" }
                p { class: "text-[var(--text-secondary)]",
                    "Look up a candidate by their profile id"
                }
            }

            div { class: "card flex gap-2",
                input {
                    class: "input flex-1",
                    r#type: "text",
                    placeholder: "Profile id",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                button {
                    class: "btn-primary",
                    onclick: open_profile,
                    "View profile"
                }
            }

            RecruitmentUserModal {
                profile_id: selected(),
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
pub fn FavoritesComponent() -> Element {
    let store = use_context::<SharedStore>();
    let favorites = favorite_profile_ids(&store.action_history());
    let mut selected = use_signal(|| None::<String>);

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header mb-8",
                h1 { class: "page-title", "Favorites" }
                p { class: "text-[var(--text-secondary)]",
                    "Candidates you have starred"
                }
            }

            if favorites.is_empty() {
                div { class: "card text-center text-[var(--text-muted)]",
                    "No favorites yet. Star a candidate from their profile to see them here."
                }
            } else {
                ul { class: "favorites-list",
                    for id in favorites {
                        FavoriteRow {
                            key: "{id}",
                            profile_id: id.clone(),
                            on_open: move |id| selected.set(Some(id)),
                        }
                    }
                }
            }

            RecruitmentUserModal {
                profile_id: selected(),
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
fn FavoriteRow(profile_id: String, on_open: EventHandler<String>) -> Element {
    let id = profile_id.clone();

    rsx! {
        li { class: "favorite-row",
            button {
                class: "favorite-row-button",
                onclick: move |_| on_open.call(id.clone()),
                span { class: "favorite-star", "★" }
                span { "{profile_id}" }
            }
        }
    }
}
