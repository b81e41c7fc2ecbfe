use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ModalSize {
    #[default]
    Medium,
    Max,
}

impl ModalSize {
    fn class(self) -> &'static str {
        match self {
            ModalSize::Medium => "modal-md",
            ModalSize::Max => "modal-max",
        }
    }
}

#[component]
pub fn Modal(
    is_open: bool,
    title: String,
    #[props(default)]
    size: ModalSize,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    let size_class = size.class();

    rsx! {
        div {
            class: "modal-overlay animate-fade-in",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal {size_class}",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }

                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Which branch a `PageWrapper` shows. An error wins over loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageView {
    Error,
    Loading,
    Content,
}

impl PageView {
    pub fn select(loading: bool, error: bool) -> Self {
        if error {
            PageView::Error
        } else if loading {
            PageView::Loading
        } else {
            PageView::Content
        }
    }
}

#[component]
pub fn PageWrapper(loading: bool, error: bool, children: Element) -> Element {
    match PageView::select(loading, error) {
        PageView::Error => rsx! {
            div { class: "page-wrapper page-error",
                p { class: "text-[var(--text-secondary)]", "Oops, something went wrong. Please try again later." }
            }
        },
        PageView::Loading => rsx! {
            div { class: "page-wrapper page-loading",
                div { class: "spinner" }
            }
        },
        PageView::Content => rsx! {
            div { class: "page-wrapper", {children} }
        },
    }
}

#[component]
pub fn CenteredContainer(children: Element) -> Element {
    rsx! {
        div { class: "centered-container", {children} }
    }
}

#[component]
pub fn ProfileImage(url: String, alt: String, #[props(default)] class: String) -> Element {
    rsx! {
        div { class: "profile-image {class}",
            if url.is_empty() {
                div { class: "profile-image-placeholder", "{alt}" }
            } else {
                img { src: "{url}", alt: "{alt}", class: "w-full h-full object-cover rounded-inherit" }
            }
        }
    }
}

/// Round external link.
#[component]
pub fn LinkBall(target: String, label: String, children: Element) -> Element {
    rsx! {
        a {
            class: "link-ball",
            href: "{target}",
            target: "_blank",
            rel: "noopener noreferrer",
            title: "{label}",
            {children}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Icon {
    Star,
    StarBorder,
    LinkedIn,
    GitHub,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Icon::Star => "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z",
            Icon::StarBorder => "M22 9.24l-7.19-.62L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21 12 17.27 18.18 21l-1.63-7.03L22 9.24zM12 15.4l-3.76 2.27 1-4.28-3.32-2.88 4.38-.38L12 6.1l1.71 4.04 4.38.38-3.32 2.88 1 4.28L12 15.4z",
            Icon::LinkedIn => "M19 3a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h14m-.5 15.5v-5.3a3.26 3.26 0 0 0-3.26-3.26c-.85 0-1.84.52-2.32 1.3v-1.11h-2.79v8.37h2.79v-4.93c0-.77.62-1.4 1.39-1.4a1.4 1.4 0 0 1 1.4 1.4v4.93h2.79M6.88 8.56a1.68 1.68 0 0 0 1.68-1.68c0-.93-.75-1.69-1.68-1.69a1.69 1.69 0 0 0-1.69 1.69c0 .93.76 1.68 1.69 1.68m1.39 9.94v-8.37H5.5v8.37h2.77z",
            Icon::GitHub => "M12 .3a12 12 0 0 0-3.8 23.4c.6.1.8-.3.8-.6v-2c-3.3.7-4-1.6-4-1.6-.6-1.4-1.4-1.8-1.4-1.8-1-.7.1-.7.1-.7 1.2 0 1.9 1.2 1.9 1.2 1 1.8 2.8 1.3 3.5 1 0-.8.4-1.3.7-1.6-2.7-.3-5.5-1.3-5.5-6 0-1.2.5-2.3 1.3-3.1-.2-.4-.6-1.6 0-3.2 0 0 1-.3 3.4 1.2a11.5 11.5 0 0 1 6 0c2.3-1.5 3.3-1.2 3.3-1.2.6 1.6.2 2.8 0 3.2.9.8 1.3 1.9 1.3 3.2 0 4.6-2.8 5.6-5.5 5.9.5.4.9 1 .9 2.2v3.3c0 .3.1.7.8.6A12 12 0 0 0 12 .3",
        }
    }
}

#[component]
pub fn IconView(icon: Icon, #[props(default)] large: bool) -> Element {
    let size = if large { "35" } else { "24" };
    let d = icon.path();

    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "{d}" }
        }
    }
}
