//! Candidate profile dialog.
//!
//! Fetches the candidate whenever the profile id or the auth token changes and
//! lets the recruiter star them as a favorite.

use dioxus::prelude::*;
use crate::backend::recruitment::{click_favorite, is_favorite};
use crate::components::common::{
    CenteredContainer, Icon, IconView, LinkBall, Modal, ModalSize, PageWrapper, ProfileImage,
};
use crate::components::profile_loader::{fetch_ticket, present, ProfileLoader, ProfileSummary};
use crate::components::recruitment_profile_info::RecruitmentProfileInfo;
use crate::components::{SharedFetcher, SharedStore};

#[component]
pub fn RecruitmentUserModal(profile_id: Option<String>, on_close: EventHandler<()>) -> Element {
    let store = use_context::<SharedStore>();
    let fetcher = use_context::<SharedFetcher>();
    let mut loader = use_signal(ProfileLoader::default);

    let id_token = store.auth_token();
    use_effect(use_reactive((&profile_id, &id_token), move |(profile_id, id_token)| {
        let Some(ticket) = loader.write().begin(profile_id.as_deref(), &id_token) else {
            return;
        };
        let fetcher = fetcher.clone();
        spawn(async move {
            let result = fetch_ticket(fetcher.as_ref(), &ticket).await;
            loader.write().settle(&ticket, result);
        });
    }));

    let summary = use_memo(move || ProfileSummary::from_participant(loader.read().participant()));
    let summary = summary.read().clone();

    let (loading, failed, participant) = {
        let loader = loader.read();
        (loader.is_loading(), loader.is_failed(), loader.participant().cloned())
    };

    let current_id = present(profile_id.as_deref()).map(str::to_string);
    let favorite = current_id
        .as_deref()
        .map(|id| is_favorite(&store.action_history(), id))
        .unwrap_or(false);

    let on_star = {
        let store = store.clone();
        let id = current_id.clone().unwrap_or_default();
        move |_| click_favorite(store.as_ref(), &id)
    };

    let star_title = if favorite { "Remove from favorites" } else { "Add to favorites" };

    let close = move |_: ()| {
        loader.write().reset();
        on_close.call(());
    };

    rsx! {
        Modal {
            is_open: current_id.is_some(),
            title: "Profile details".to_string(),
            size: ModalSize::Max,
            on_close: close,

            PageWrapper { loading: loading, error: failed,
                CenteredContainer {
                    div { class: "profile-modal",
                        div { class: "profile-header",
                            button {
                                class: "favorite-toggle",
                                title: star_title,
                                onclick: on_star,
                                if favorite {
                                    IconView { icon: Icon::Star, large: true }
                                } else {
                                    IconView { icon: Icon::StarBorder, large: true }
                                }
                            }

                            ProfileImage {
                                url: summary.image_url.clone(),
                                alt: "Profile picture".to_string(),
                                class: "profile-pic".to_string(),
                            }

                            div { class: "name-container",
                                h3 { class: "profile-name", "{summary.name}" }
                                h6 { class: "profile-subheading", "{summary.subheading}" }
                            }

                            div { class: "profile-links",
                                if let Some(linkedin) = summary.linkedin.clone() {
                                    LinkBall { target: linkedin, label: "LinkedIn".to_string(),
                                        IconView { icon: Icon::LinkedIn }
                                    }
                                }
                                if let Some(github) = summary.github.clone() {
                                    LinkBall { target: github, label: "GitHub".to_string(),
                                        IconView { icon: Icon::GitHub }
                                    }
                                }
                            }
                        }

                        if let Some(participant) = participant {
                            RecruitmentProfileInfo { participant: participant }
                        }
                    }
                }
            }
        }
    }
}
