mod backend;
mod components;
mod config;
#[cfg(test)]
mod tests;

use std::rc::Rc;
use std::sync::OnceLock;

use components::nav_bar::NavComponent;
use components::recruitment_page::{FavoritesComponent, RecruitmentComponent};
use components::{AppState, AppStore, SharedFetcher, SharedStore};

use backend::user_profiles::UserProfilesService;
use backend::AppCmd;
use config::Config;
use dioxus::prelude::*;
use tokio::sync::mpsc;

/// Settings read once at startup.
static CONFIG: OnceLock<Config> = OnceLock::new();

fn app_config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(NavComponent)]
    #[route("/")]
    RecruitmentComponent {},
    #[route("/favorites")]
    FavoritesComponent {},
}

fn main() {
    let config = app_config();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt().with_max_level(config.log_level).try_init();
    }
    tracing::info!(api = %config.api_base_url, "Starting recruitment app");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = app_config();
    let app_state = AppState::new(config.id_token.clone());

    let cmd_tx = use_hook(|| {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        spawn(backend::init(config.store_path.clone(), cmd_rx, event_tx));
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                app_state.apply(event);
            }
        });

        let _ = cmd_tx.send(AppCmd::Init);
        let _ = cmd_tx.send(AppCmd::FetchActionHistory);
        cmd_tx
    });

    use_context_provider(|| app_state);
    use_context_provider(|| -> SharedStore { Rc::new(AppStore::new(app_state, cmd_tx.clone())) });
    use_context_provider(|| -> SharedFetcher { Rc::new(UserProfilesService::new(config.api_base_url.clone())) });

    rsx! {
        document::Stylesheet {href: asset!("/assets/main.css")}
        Router::<Route> {}
    }
}
