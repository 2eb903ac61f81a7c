use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::SearchScreenIntent;
use crate::ui::screen::state::SearchScreenState;

pub struct SearchScreenReducer;

impl Reducer for SearchScreenReducer {
    type State = SearchScreenState;
    type Intent = SearchScreenIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchScreenIntent::InsertChar(c) => {
                if !c.is_control() {
                    state.input.push(c);
                }
                state
            }
            SearchScreenIntent::InsertText(text) => {
                state
                    .input
                    .extend(text.chars().filter(|c| !c.is_control()));
                state
            }
            SearchScreenIntent::Backspace => {
                state.input.pop();
                state
            }
            SearchScreenIntent::Clear => {
                state.input.clear();
                state.selected = 0;
                state
            }
            SearchScreenIntent::MoveUp => {
                let len = state.outcome.items().len();
                if len > 0 {
                    state.selected = if state.selected == 0 {
                        len - 1
                    } else {
                        state.selected - 1
                    };
                }
                state
            }
            SearchScreenIntent::MoveDown => {
                let len = state.outcome.items().len();
                if len > 0 {
                    state.selected = if state.selected + 1 >= len {
                        0
                    } else {
                        state.selected + 1
                    };
                }
                state
            }
            SearchScreenIntent::Tick => {
                if state.outcome.is_loading() {
                    state.spinner_tick = state.spinner_tick.wrapping_add(1);
                }
                state
            }
            SearchScreenIntent::OutcomeChanged(outcome) => SearchScreenState {
                outcome,
                selected: 0,
                spinner_tick: 0,
                ..state
            },
        }
    }
}
