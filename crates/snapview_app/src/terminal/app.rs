use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use snapview_core::{update, AppState, Msg, ScreenView};
use snapview_engine::{EngineHandle, SystemBrowser};
use snapview_logging::{set_dispatch_seq, snap_debug, snap_info, snap_warn};

use super::config::{config_path, load_config, AppConfig};
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, CommandContext, HELP};
use super::ui::render::render;

/// Everything the main loop reacts to.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Core(Msg),
    Input(String),
    ToastExpired(u64),
    Notice(String),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let loaded = load_config(&path);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    snapview_logging::initialize(config.log_destination, LevelFilter::Info);
    if let Err(err) = &loaded {
        snap_warn!("Using default configuration: {}", err);
    }
    snap_info!("Starting snapview with {:?}", config.preview);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let engine = EngineHandle::new(Arc::new(SystemBrowser));
    let runner = EffectRunner::new(engine, event_tx.clone());

    spawn_stdin_reader(event_tx.clone());

    // Background tick to throttle rendering.
    let tick_tx = event_tx.clone();
    thread::spawn(move || {
        let interval = Duration::from_millis(75);
        while tick_tx.send(AppEvent::Core(Msg::Tick)).is_ok() {
            thread::sleep(interval);
        }
    });

    let initial_location = std::env::args().nth(1);
    let mut session = Session::new(config, runner);
    if let Some(location) = initial_location {
        session.runner.history_mut().replace(location.clone());
        session.dispatch(Msg::LocationChanged(location));
    }
    session.flush_render()?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Quit => break,
            AppEvent::Core(Msg::Tick) => session.flush_render()?,
            AppEvent::Core(msg) => session.dispatch(msg),
            AppEvent::Input(line) => {
                if !session.handle_input(&line)? {
                    break;
                }
            }
            AppEvent::ToastExpired(id) => {
                if session.runner.expire_toast(id) {
                    session.needs_render = true;
                }
            }
            AppEvent::Notice(text) => {
                session.notice = Some(text);
                session.needs_render = true;
            }
        }
    }

    session.runner.shutdown();
    snap_info!("Exiting");
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    seq: u64,
    notice: Option<String>,
    needs_render: bool,
}

impl Session {
    fn new(config: AppConfig, runner: EffectRunner) -> Self {
        Self {
            state: AppState::with_config(config.preview),
            runner,
            seq: 0,
            notice: None,
            needs_render: true,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        self.seq += 1;
        set_dispatch_seq(self.seq);
        snap_debug!("dispatch #{} {:?}", self.seq, msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let state_changed = state.consume_dirty();
        self.state = state;

        let host_changed = self.runner.enqueue(effects);
        if state_changed || host_changed {
            self.needs_render = true;
        }
    }

    /// Handles one line of user input. Returns false when the user quits.
    fn handle_input(&mut self, line: &str) -> anyhow::Result<bool> {
        let ctx = CommandContext {
            on_entry: matches!(self.state.view().screen, ScreenView::Entry(_)),
            ticket: self.state.preview().map(|preview| preview.ticket()),
        };
        self.notice = None;
        match parse_command(line, ctx) {
            Command::Quit => return Ok(false),
            Command::Dispatch(msgs) => {
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            Command::Navigate(location) => {
                if self.runner.history().current() != location {
                    self.runner.history_mut().push(location.clone());
                }
                self.dispatch(Msg::LocationChanged(location));
            }
            Command::HistoryBack => match self.runner.history_mut().back() {
                Some(location) => self.dispatch(Msg::LocationChanged(location)),
                None => self.notice = Some("No earlier page in history.".to_string()),
            },
            Command::Help => {
                let mut stdout = io::stdout().lock();
                for line in HELP {
                    writeln!(stdout, "{line}").context("write help")?;
                }
            }
            Command::Unknown(text) => {
                self.notice = Some(format!("Unknown command `{text}`; type `help`."));
            }
        }
        self.needs_render = true;
        Ok(true)
    }

    fn flush_render(&mut self) -> anyhow::Result<()> {
        if !std::mem::take(&mut self.needs_render) {
            return Ok(());
        }
        let lines = render(
            &self.state.view(),
            self.runner.history().current(),
            self.runner.toasts(),
            self.notice.as_deref(),
        );
        let mut stdout = io::stdout().lock();
        for line in lines {
            writeln!(stdout, "{line}").context("write frame")?;
        }
        stdout.flush().context("flush frame")?;
        Ok(())
    }
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::Quit);
    });
}
