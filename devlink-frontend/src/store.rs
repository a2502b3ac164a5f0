use druid::im::Vector;
use druid::{Data, Lens};

use crate::view_model::{RequestRow, UserCard};

/// The whole client-side state. Each field is a slice owned by the
/// equally named reducer module below; the UI only ever reads it, and
/// mutation happens through [`dispatch`].
#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub user: Option<UserCard>,
    pub feed: Vector<UserCard>,
    pub connections: Vector<UserCard>,
    pub requests: Vector<RequestRow>,
    /// True until the initial requests fetch resolves, success or not.
    pub requests_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: None,
            feed: Vector::new(),
            connections: Vector::new(),
            requests: Vector::new(),
            requests_loading: true,
        }
    }

    pub fn requests_screen(&self) -> RequestsScreen {
        if self.requests_loading {
            RequestsScreen::Loading
        } else if self.requests.is_empty() {
            RequestsScreen::Empty
        } else {
            RequestsScreen::Populated
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RequestsScreen {
    Loading,
    Empty,
    Populated,
}

#[derive(Clone, Debug)]
pub enum Action {
    AddUser(UserCard),
    RemoveUser,
    AddFeed(Vector<UserCard>),
    RemoveFeed,
    AddConnections(Vector<UserCard>),
    RemoveConnections,
    AddRequests(Vector<RequestRow>),
    RemoveRequest(String),
    RequestsLoaded,
    ReviewFailed(String),
}

/// Sole mutation entry point: routes an action to the slice that owns the
/// state it touches.
pub fn dispatch(state: &mut AppState, action: Action) {
    log::trace!("{action:?}");
    match action {
        Action::AddUser(user) => state.user = user::add_user(user),
        Action::RemoveUser => state.user = user::remove_user(),
        Action::AddFeed(feed) => state.feed = feed::add_feed(feed),
        Action::RemoveFeed => state.feed = feed::remove_feed(),
        Action::AddConnections(connections) => {
            state.connections = connections::add_connections(connections)
        }
        Action::RemoveConnections => state.connections = connections::remove_connections(),
        Action::AddRequests(requests) => state.requests = requests::add_requests(requests),
        Action::RemoveRequest(id) => {
            state.requests = requests::remove_request(state.requests.clone(), &id)
        }
        Action::RequestsLoaded => state.requests_loading = false,
        Action::ReviewFailed(id) => {
            state.requests = requests::clear_pending(state.requests.clone(), &id)
        }
    }
}

pub mod user {
    use crate::view_model::UserCard;

    pub fn add_user(user: UserCard) -> Option<UserCard> {
        Some(user)
    }

    pub fn remove_user() -> Option<UserCard> {
        None
    }
}

pub mod feed {
    use crate::view_model::UserCard;
    use druid::im::Vector;

    pub fn add_feed(feed: Vector<UserCard>) -> Vector<UserCard> {
        feed
    }

    pub fn remove_feed() -> Vector<UserCard> {
        Vector::new()
    }
}

pub mod connections {
    use crate::view_model::UserCard;
    use druid::im::Vector;

    pub fn add_connections(connections: Vector<UserCard>) -> Vector<UserCard> {
        connections
    }

    pub fn remove_connections() -> Vector<UserCard> {
        Vector::new()
    }
}

pub mod requests {
    use crate::view_model::RequestRow;
    use druid::im::Vector;

    /// Wholesale replacement; the collection is never merged.
    pub fn add_requests(requests: Vector<RequestRow>) -> Vector<RequestRow> {
        requests
    }

    /// Drops the entry with the given id, keeping the rest in order.
    /// A no-op when no entry has that id.
    pub fn remove_request(current: Vector<RequestRow>, id: &str) -> Vector<RequestRow> {
        current.into_iter().filter(|row| row.id != id).collect()
    }

    pub fn clear_pending(current: Vector<RequestRow>, id: &str) -> Vector<RequestRow> {
        current
            .into_iter()
            .map(|mut row| {
                if row.id == id {
                    row.review_pending = false;
                }
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devlink_common::{PendingRequest, RequestId, UserSummary};

    fn row(id: &str) -> RequestRow {
        RequestRow::new(&PendingRequest {
            id: RequestId(id.to_string()),
            from_user_id: UserSummary::default(),
        })
    }

    fn loaded(rows: Vec<RequestRow>) -> AppState {
        let mut state = AppState::new();
        dispatch(&mut state, Action::AddRequests(rows.into_iter().collect()));
        dispatch(&mut state, Action::RequestsLoaded);
        state
    }

    #[test]
    fn initial_screen_is_loading() {
        assert_eq!(AppState::new().requests_screen(), RequestsScreen::Loading);
    }

    #[test]
    fn add_requests_replaces_wholesale() {
        let mut state = loaded(vec![row("a"), row("b")]);
        dispatch(&mut state, Action::AddRequests(Vector::from(vec![row("c")])));
        assert_eq!(state.requests, Vector::from(vec![row("c")]));
    }

    #[test]
    fn remove_request_keeps_survivors_in_order() {
        let mut state = loaded(vec![row("a"), row("b"), row("c")]);
        dispatch(&mut state, Action::RemoveRequest("b".to_string()));
        assert_eq!(state.requests, Vector::from(vec![row("a"), row("c")]));
    }

    #[test]
    fn remove_request_with_unknown_id_is_a_noop() {
        let mut state = loaded(vec![row("a"), row("b")]);
        let before = state.requests.clone();
        dispatch(&mut state, Action::RemoveRequest("missing".to_string()));
        assert_eq!(state.requests, before);
    }

    #[test]
    fn empty_fetch_renders_caught_up() {
        let state = loaded(vec![]);
        assert_eq!(state.requests_screen(), RequestsScreen::Empty);
    }

    #[test]
    fn failed_fetch_renders_caught_up_not_an_error() {
        // A load error is only written to the log; the view falls through
        // to the same screen as an empty result.
        let mut state = AppState::new();
        dispatch(&mut state, Action::RequestsLoaded);
        assert_eq!(state.requests_screen(), RequestsScreen::Empty);
    }

    #[test]
    fn requests_drain_to_caught_up() {
        let mut state = loaded(vec![row("a")]);
        assert_eq!(state.requests_screen(), RequestsScreen::Populated);
        dispatch(&mut state, Action::RemoveRequest("a".to_string()));
        assert_eq!(state.requests_screen(), RequestsScreen::Empty);
    }

    #[test]
    fn review_failure_reenables_the_row() {
        let mut pending = row("a");
        pending.review_pending = true;
        let mut state = loaded(vec![pending, row("b")]);
        dispatch(&mut state, Action::ReviewFailed("a".to_string()));
        assert!(!state.requests[0].review_pending);
        assert!(!state.requests[1].review_pending);
    }

    #[test]
    fn other_slices_replace_and_reset() {
        let mut state = AppState::new();
        let card = UserCard::new(&UserSummary::default());

        dispatch(&mut state, Action::AddUser(card.clone()));
        assert!(state.user.is_some());
        dispatch(&mut state, Action::RemoveUser);
        assert!(state.user.is_none());

        dispatch(&mut state, Action::AddFeed(Vector::from(vec![card.clone()])));
        dispatch(
            &mut state,
            Action::AddConnections(Vector::from(vec![card.clone(), card])),
        );
        assert_eq!(state.feed.len(), 1);
        assert_eq!(state.connections.len(), 2);
        dispatch(&mut state, Action::RemoveFeed);
        dispatch(&mut state, Action::RemoveConnections);
        assert!(state.feed.is_empty());
        assert!(state.connections.is_empty());
    }
}
