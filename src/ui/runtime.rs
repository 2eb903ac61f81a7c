use std::io;

use crate::config::UiConfig;
use crate::search::SearchService;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{map_key, KeyAction};
use crate::ui::mvi::Reducer;
use crate::ui::render::draw;
use crate::ui::screen::{SearchScreenIntent, SearchScreenReducer, SearchScreenState};
use crate::ui::terminal_guard::setup_terminal;

/// Runs the interactive search screen until the user quits.
pub async fn run(service: SearchService, config: UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(config.tick_rate(), service.subscribe());
    let mut state = SearchScreenState {
        outcome: service.current(),
        ..Default::default()
    };

    tracing::info!(
        endpoint = service.endpoint(),
        live_search = config.live_search,
        "Search screen started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &state))?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            AppEvent::Key(key) => match map_key(key) {
                KeyAction::Quit => break,
                KeyAction::Submit => {
                    service.search(&state.input);
                }
                KeyAction::Clear => {
                    state = SearchScreenReducer::reduce(state, SearchScreenIntent::Clear);
                    service.search("");
                }
                KeyAction::Screen(intent) => {
                    state = apply_edit(&service, &config, state, intent);
                }
                KeyAction::Ignore => {}
            },
            AppEvent::Paste(text) => {
                state = apply_edit(&service, &config, state, SearchScreenIntent::InsertText(text));
            }
            AppEvent::Tick => {
                state = SearchScreenReducer::reduce(state, SearchScreenIntent::Tick);
            }
            AppEvent::Outcome(outcome) => {
                tracing::debug!(outcome = outcome.label(), "Outcome received");
                state = SearchScreenReducer::reduce(state, SearchScreenIntent::OutcomeChanged(outcome));
            }
            AppEvent::Resize => {}
        }
    }

    drop(events);
    drop(guard);
    tracing::info!("Search screen closed");
    Ok(())
}

fn apply_edit(
    service: &SearchService,
    config: &UiConfig,
    state: SearchScreenState,
    intent: SearchScreenIntent,
) -> SearchScreenState {
    let edits_text = intent.edits_text();
    let before = state.input.clone();
    let state = SearchScreenReducer::reduce(state, intent);
    if config.live_search && edits_text && state.input != before {
        service.search(&state.input);
    }
    state
}
