//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes query changes,
//! navigation, loader completion and teardown, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the front-end or from the loader
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned `bool` tells the caller whether the state changed in a way that
//! needs a re-render.
//!
//! # Example
//!
//! ```rust
//! use searchbox::app::{handle_event, Action, AppState, Event, SessionStatus};
//!
//! let mut state = AppState::new();
//! let (render, actions) = handle_event(&mut state, &Event::QueryChanged("ca".into()))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::StartLoad]);
//! assert_eq!(state.status, SessionStatus::Loading);
//! # Ok::<(), searchbox::SearchboxError>(())
//! ```

use super::index::normalize_query;
use super::modes::SessionStatus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::loader::LoadOutcome;

/// Events triggered by user input or by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The query text changed. Carries the full new text.
    QueryChanged(String),
    /// The clear button was pressed.
    ClearQuery,
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Launches the selected application.
    Select,
    /// Launches the application at a zero-based position in the filtered view.
    SelectAt(usize),
    /// The one-shot load finished.
    LoadFinished(LoadOutcome),
    /// The search UI is being dismissed.
    Close,
}

/// Processes an event, mutates state, and returns `(render, actions)`.
///
/// # Errors
///
/// Currently infallible; the signature matches the rest of the event layer so
/// front-ends can propagate with `?`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, status = ?state.status).entered();

    if state.status == SessionStatus::Closed {
        tracing::debug!("session closed, ignoring event");
        return Ok((false, vec![]));
    }

    match event {
        Event::QueryChanged(query) => Ok(change_query(state, query)),
        Event::ClearQuery => Ok(change_query(state, "")),
        Event::KeyDown => {
            if !state.status.is_ready() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if !state.status.is_ready() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Select => Ok((false, launch_selected(state))),
        Event::SelectAt(position) => {
            if *position >= state.count() {
                tracing::debug!(position = position, count = state.count(), "selection out of range");
                return Ok((false, vec![]));
            }
            state.selected_index = *position;
            Ok((true, launch_selected(state)))
        }
        Event::LoadFinished(outcome) => {
            if state.status != SessionStatus::Loading {
                tracing::debug!(status = ?state.status, "unexpected load completion ignored");
                return Ok((false, vec![]));
            }

            match outcome {
                LoadOutcome::Loaded(report) => {
                    tracing::debug!(
                        items = report.items.len(),
                        skipped = report.skipped,
                        pending_query = %state.query,
                        "load finished"
                    );
                    state.install(report.items.clone());
                    Ok((true, vec![]))
                }
                LoadOutcome::Cancelled => {
                    tracing::debug!("load cancelled, closing session");
                    state.status = SessionStatus::Closed;
                    Ok((true, vec![]))
                }
            }
        }
        Event::Close => {
            let mut actions = vec![];
            if state.status == SessionStatus::Loading {
                actions.push(Action::CancelLoad);
            }
            actions.push(Action::Close);
            state.status = SessionStatus::Closed;
            tracing::debug!("session closed");
            Ok((false, actions))
        }
    }
}

fn change_query(state: &mut AppState, query: &str) -> (bool, Vec<Action>) {
    query.clone_into(&mut state.query);

    match state.status {
        SessionStatus::Uninitialized => {
            if normalize_query(query).is_some() {
                tracing::debug!("first query typed, starting load");
                state.status = SessionStatus::Loading;
                (true, vec![Action::StartLoad])
            } else {
                (false, vec![])
            }
        }
        SessionStatus::Loading => {
            tracing::trace!(query = %query, "query pending until load finishes");
            (true, vec![])
        }
        SessionStatus::Ready => {
            state.apply_query();
            (true, vec![])
        }
        SessionStatus::Closed => (false, vec![]),
    }
}

fn launch_selected(state: &AppState) -> Vec<Action> {
    state.selected_item().map_or_else(
        || {
            tracing::debug!("no application selected");
            vec![]
        },
        |item| {
            tracing::debug!(identifier = %item.identifier, name = %item.name, "launching application");
            vec![Action::Launch {
                identifier: item.identifier.clone(),
                name: item.name.clone(),
            }]
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppItem, Icon};
    use crate::loader::LoadReport;
    use std::sync::Arc;

    fn loaded(items: Vec<AppItem>) -> Event {
        Event::LoadFinished(LoadOutcome::Loaded(LoadReport {
            items: Arc::from(items),
            ..LoadReport::empty()
        }))
    }

    fn apps() -> Vec<AppItem> {
        vec![
            AppItem::new("Calculator", "com.a.calc", Icon::generic()),
            AppItem::new("Calendar", "com.a.cal2", Icon::generic()),
            AppItem::new("Camera", "com.a.cam", Icon::generic()),
        ]
    }

    #[test]
    fn blank_query_before_load_stays_uninitialized() {
        let mut state = AppState::new();
        let (render, actions) = handle_event(&mut state, &Event::QueryChanged("   ".into())).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.status, SessionStatus::Uninitialized);
    }

    #[test]
    fn queries_while_loading_do_not_start_another_load() {
        let mut state = AppState::new();
        let (_, first) = handle_event(&mut state, &Event::QueryChanged("c".into())).unwrap();
        let (_, second) = handle_event(&mut state, &Event::QueryChanged("ca".into())).unwrap();
        let (_, third) = handle_event(&mut state, &Event::QueryChanged("cam".into())).unwrap();

        assert_eq!(first, vec![Action::StartLoad]);
        assert!(second.is_empty());
        assert!(third.is_empty());
        assert_eq!(state.query, "cam");
    }

    #[test]
    fn pending_query_applied_on_completion() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::QueryChanged("c".into())).unwrap();
        handle_event(&mut state, &Event::QueryChanged("cam".into())).unwrap();

        let (render, _) = handle_event(&mut state, &loaded(apps())).unwrap();

        assert!(render);
        assert_eq!(state.status, SessionStatus::Ready);
        let names: Vec<_> = state.view().unwrap().iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, ["Camera"]);
    }

    #[test]
    fn select_emits_launch_for_selected_item() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::QueryChanged("cal".into())).unwrap();
        handle_event(&mut state, &loaded(apps())).unwrap();
        handle_event(&mut state, &Event::KeyDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();

        assert_eq!(
            actions,
            vec![Action::Launch {
                identifier: "com.a.cal2".to_string(),
                name: "Calendar".to_string(),
            }]
        );
    }

    #[test]
    fn select_on_empty_view_is_noop() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::QueryChanged("zzz".into())).unwrap();
        handle_event(&mut state, &loaded(apps())).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Select).unwrap();
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::SelectAt(0)).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn clear_query_shows_full_list_when_ready() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::QueryChanged("cam".into())).unwrap();
        handle_event(&mut state, &loaded(apps())).unwrap();

        handle_event(&mut state, &Event::ClearQuery).unwrap();

        assert_eq!(state.query, "");
        assert_eq!(state.count(), 3);
    }

    #[test]
    fn close_while_loading_cancels_and_ignores_late_completion() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::QueryChanged("c".into())).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CancelLoad, Action::Close]);

        let (render, _) = handle_event(&mut state, &loaded(apps())).unwrap();
        assert!(!render);
        assert_eq!(state.status, SessionStatus::Closed);
        assert!(state.index.is_none());
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let mut state = AppState::new();
        handle_event(&mut state, &Event::QueryChanged("c".into())).unwrap();
        handle_event(&mut state, &loaded(apps())).unwrap();

        let (render, _) = handle_event(&mut state, &loaded(vec![])).unwrap();

        assert!(!render);
        assert_eq!(state.index.as_ref().unwrap().full_len(), 3);
    }
}
