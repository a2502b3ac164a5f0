use std::env;
use std::sync::Arc;

use devlink_client::client;
use devlink_common::{BaseUrl, RequestId, ReviewStatus};
use druid::{AppLauncher, ExtEventSink, WindowDesc};
use tokio::sync::mpsc;

mod store;
mod ui;
mod view_model;

use store::{dispatch, Action, AppState};
use view_model::{request_rows, user_cards, UserCard};

pub enum Event {
    Review { status: ReviewStatus, id: RequestId },
}

pub type EventSender = Arc<mpsc::UnboundedSender<Event>>;

struct Config {
    base: BaseUrl,
    email: Option<String>,
    password: Option<String>,
}

fn config_from_env() -> Config {
    Config {
        base: BaseUrl(
            env::var("DEVLINK_BASE_URL").unwrap_or_else(|_| String::from("http://localhost:7777")),
        ),
        email: env::var("DEVLINK_EMAIL").ok(),
        password: env::var("DEVLINK_PASSWORD").ok(),
    }
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let state = AppState::new();

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let events_tx = Arc::new(events_tx);

    let main_window = WindowDesc::new(ui::ui_builder(events_tx)).title("devlink");
    let launcher = AppLauncher::with_window(main_window);

    let sink = launcher.get_external_handle();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    std::thread::spawn(move || {
        runtime.block_on(async_main(sink, events_rx));
    });

    launcher.launch(state).expect("window launch");
}

async fn async_main(sink: ExtEventSink, mut events: mpsc::UnboundedReceiver<Event>) {
    let config = config_from_env();
    let base = config.base.clone();

    let http = match devlink_client::http_client() {
        Ok(http) => http,
        Err(err) => {
            log::error!("could not build http client: {err}");
            apply(&sink, Action::RequestsLoaded);
            return;
        }
    };

    match (&config.email, &config.password) {
        (Some(email), Some(password)) => {
            if let Err(err) = client::login(&http, &base, email, password).await {
                log::error!("login failed: {err}");
            }
        }
        _ => log::warn!("DEVLINK_EMAIL/DEVLINK_PASSWORD not set, skipping login"),
    }

    match client::get_profile(&http, &base).await {
        Ok(profile) => {
            let card = UserCard::new(&profile);
            log::info!("signed in as {}", card.full_name);
            apply(&sink, Action::AddUser(card));
        }
        Err(err) => log::error!("error loading profile: {err}"),
    }

    match client::get_connections(&http, &base).await {
        Ok(connections) => apply(&sink, Action::AddConnections(user_cards(&connections))),
        Err(err) => log::error!("error loading connections: {err}"),
    }

    match client::get_feed(&http, &base).await {
        Ok(feed) => apply(&sink, Action::AddFeed(user_cards(&feed))),
        Err(err) => log::error!("error loading feed: {err}"),
    }

    // The request collection is fetched once per session; review actions
    // below mutate the local copy instead of re-fetching.
    match client::get_received_requests(&http, &base).await {
        Ok(requests) => apply(&sink, Action::AddRequests(request_rows(&requests))),
        Err(err) => log::error!("error loading requests: {err}"),
    }
    apply(&sink, Action::RequestsLoaded);

    while let Some(event) = events.recv().await {
        match event {
            Event::Review { status, id } => {
                match client::review_request(&http, &base, status, &id).await {
                    Ok(()) => apply(&sink, Action::RemoveRequest(id.0)),
                    Err(err) => {
                        log::error!("error reviewing request {}: {err}", id.0);
                        apply(&sink, Action::ReviewFailed(id.0));
                    }
                }
            }
        }
    }
}

fn apply(sink: &ExtEventSink, action: Action) {
    sink.add_idle_callback(move |data: &mut AppState| dispatch(data, action));
}
