use snapview_logging::snap_debug;

use crate::state::History;
use crate::{AppState, Effect, Msg, Route, TargetUrl, Toast};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::InputChanged(text) => state.set_input(text),
        Msg::Submitted => submit(&mut state, &mut effects),
        Msg::BackClicked => {
            if *state.route() != Route::Entry {
                state.navigate(Route::Entry, History::Push, &mut effects);
            }
        }
        Msg::LocationChanged(location) => {
            let route = Route::parse(&location);
            if route != *state.route() {
                state.navigate(route, History::Keep, &mut effects);
            }
        }
        Msg::ModeSelected(mode) => {
            let changed = state.with_preview(|preview, config, tickets| {
                preview.select_mode(mode, config, tickets, &mut effects)
            });
            if changed == Some(true) {
                state.mark_dirty();
            }
        }
        Msg::RefreshClicked => {
            if state
                .with_preview(|preview, config, tickets| {
                    preview.refresh(config, tickets, &mut effects)
                })
                .is_some()
            {
                state.mark_dirty();
            }
        }
        Msg::LoadTimerFired { ticket } => {
            let applied = state.with_preview(|preview, _, _| preview.timer_fired(ticket));
            match applied {
                Some(true) => state.mark_dirty(),
                Some(false) => {}
                None => snap_debug!("Load timer {} fired with no preview mounted", ticket),
            }
        }
        Msg::FrameSettled { ticket, outcome } => {
            let applied = state.with_preview(|preview, _, _| {
                preview.frame_settled(ticket, outcome, &mut effects)
            });
            if applied == Some(true) {
                state.mark_dirty();
            }
        }
        Msg::CaptureClicked => {
            effects.push(Effect::ShowToast(Toast::captured(
                state.config().toast_duration,
            )));
        }
        Msg::OpenInBrowserClicked => {
            if let Some(preview) = state.preview() {
                effects.push(Effect::OpenExternal {
                    url: preview.target().to_string(),
                });
            }
        }
        Msg::ViewportResized(width) => state.set_viewport_width(width),
        Msg::Tick | Msg::NoOp => {}
    }

    (state, effects)
}

fn submit(state: &mut AppState, effects: &mut Vec<Effect>) {
    if *state.route() != Route::Entry {
        return;
    }
    let Some(target) = TargetUrl::parse(state.input()) else {
        snap_debug!("Ignoring empty submission");
        return;
    };
    state.navigate(Route::preview(target), History::Push, effects);
}
