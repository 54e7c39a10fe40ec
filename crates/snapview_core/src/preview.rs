//! Load/viewport state machine for a mounted preview view.
//!
//! Every state-determining input (mount, mode change, refresh) issues a fresh
//! [`LoadTicket`]. Timer and frame signals carry the ticket they were issued
//! for and are dropped unless it is still the current one, so a late signal
//! can never overwrite the result of a newer input.

use std::fmt;

use snapview_logging::snap_debug;

use crate::{
    select_strategy, DisplayUrl, Effect, PreviewConfig, RenderStrategy, TargetUrl, ViewportMode,
};

/// Generation handle for one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues strictly increasing tickets. Outlives individual preview mounts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> LoadTicket {
        self.last += 1;
        LoadTicket(self.last)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    target: TargetUrl,
    display: DisplayUrl,
    mode: ViewportMode,
    load: LoadState,
    ticket: LoadTicket,
    timer_pending: bool,
}

impl PreviewState {
    /// Mounts a preview in mobile mode and starts its first load.
    pub fn mount(
        target: TargetUrl,
        config: &PreviewConfig,
        tickets: &mut TicketCounter,
        effects: &mut Vec<Effect>,
    ) -> Self {
        let display = target.display();
        let mut state = Self {
            target,
            display,
            mode: ViewportMode::default(),
            load: LoadState::Loading,
            // Replaced by `start_load` before anything can observe it.
            ticket: LoadTicket(0),
            timer_pending: false,
        };
        state.start_load(config, true, tickets, effects);
        state
    }

    pub fn target(&self) -> &TargetUrl {
        &self.target
    }

    pub fn display(&self) -> &DisplayUrl {
        &self.display
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    pub fn timer_pending(&self) -> bool {
        self.timer_pending
    }

    pub fn strategy(&self, config: &PreviewConfig) -> RenderStrategy {
        select_strategy(&self.display, self.mode, &config.demo_domain)
    }

    /// Switches viewport mode. Selecting the active mode changes nothing.
    pub fn select_mode(
        &mut self,
        mode: ViewportMode,
        config: &PreviewConfig,
        tickets: &mut TicketCounter,
        effects: &mut Vec<Effect>,
    ) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.start_load(config, true, tickets, effects);
        true
    }

    /// Re-enters loading regardless of strategy.
    pub fn refresh(
        &mut self,
        config: &PreviewConfig,
        tickets: &mut TicketCounter,
        effects: &mut Vec<Effect>,
    ) {
        self.start_load(config, false, tickets, effects);
    }

    /// Applies an elapsed timer. Returns false when the ticket is stale.
    pub fn timer_fired(&mut self, ticket: LoadTicket) -> bool {
        if ticket != self.ticket || !self.timer_pending {
            snap_debug!(
                "Dropping stale load timer {} (current {})",
                ticket,
                self.ticket
            );
            return false;
        }
        self.timer_pending = false;
        self.load = LoadState::Ready;
        snap_debug!("Load timer {} fired; {} ready", ticket, self.display);
        true
    }

    /// Applies an embedded-frame completion. Success and failure both end loading.
    pub fn frame_settled(
        &mut self,
        ticket: LoadTicket,
        outcome: FrameOutcome,
        effects: &mut Vec<Effect>,
    ) -> bool {
        if ticket != self.ticket {
            snap_debug!(
                "Dropping stale frame signal {:?} for {} (current {})",
                outcome,
                ticket,
                self.ticket
            );
            return false;
        }
        if self.load == LoadState::Ready {
            return false;
        }
        self.cancel_pending(effects);
        self.load = LoadState::Ready;
        snap_debug!("Frame {:?} for {}; {} ready", outcome, ticket, self.display);
        true
    }

    /// Tears the preview down, cancelling any pending timer.
    pub fn unmount(mut self, effects: &mut Vec<Effect>) {
        self.cancel_pending(effects);
        snap_debug!("Unmounted preview of {}", self.display);
    }

    fn start_load(
        &mut self,
        config: &PreviewConfig,
        allow_skip: bool,
        tickets: &mut TicketCounter,
        effects: &mut Vec<Effect>,
    ) {
        self.cancel_pending(effects);
        self.ticket = tickets.issue();

        if allow_skip && self.strategy(config) == RenderStrategy::StaticMock {
            self.load = LoadState::Ready;
            snap_debug!(
                "Static mock for {} in {} mode; skipping load",
                self.display,
                self.mode.label()
            );
            return;
        }

        self.load = LoadState::Loading;
        self.timer_pending = true;
        effects.push(Effect::ScheduleLoadTimer {
            ticket: self.ticket,
            delay: config.load_delay,
        });
        snap_debug!(
            "Loading {} in {} mode with timer {}",
            self.display,
            self.mode.label(),
            self.ticket
        );
    }

    fn cancel_pending(&mut self, effects: &mut Vec<Effect>) {
        if self.timer_pending {
            self.timer_pending = false;
            effects.push(Effect::CancelLoadTimer {
                ticket: self.ticket,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TicketCounter;

    #[test]
    fn tickets_strictly_increase() {
        let mut counter = TicketCounter::default();
        let a = counter.issue();
        let b = counter.issue();
        assert!(b > a);
        assert_eq!(a.get(), 1);
    }
}
