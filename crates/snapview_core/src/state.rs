use snapview_logging::{snap_debug, snap_info};

use crate::view_model::{
    AppViewModel, DesktopCanvas, EmbeddedFrameView, EntryView, PreviewBody, PreviewView,
    ScreenView, SecurityOverlay, OVERLAY_ACTION, OVERLAY_MESSAGE, OVERLAY_TITLE,
};
use crate::{
    desktop_scale, sandbox_attribute, Effect, LoadState, PreviewConfig, PreviewState,
    RenderStrategy, Route, TargetUrl, TicketCounter, ViewportMode, DEFAULT_VIEWPORT_WIDTH,
};

/// How a route change is reflected in the host location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum History {
    /// The host is already at the location.
    Keep,
    Push,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    config: PreviewConfig,
    route: Route,
    input: String,
    preview: Option<PreviewState>,
    tickets: TicketCounter,
    viewport_width: u32,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(PreviewConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreviewConfig) -> Self {
        Self {
            config,
            route: Route::Entry,
            input: String::new(),
            preview: None,
            tickets: TicketCounter::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            dirty: false,
        }
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn preview(&self) -> Option<&PreviewState> {
        self.preview.as_ref()
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn set_viewport_width(&mut self, width: u32) {
        if self.viewport_width != width {
            self.viewport_width = width;
            self.mark_dirty();
        }
    }

    /// Switches to `route`, unmounting the current preview and mounting a new one
    /// when the route is a preview.
    pub(crate) fn navigate(&mut self, route: Route, history: History, effects: &mut Vec<Effect>) {
        if let Some(preview) = self.preview.take() {
            preview.unmount(effects);
        }
        if history == History::Push {
            effects.push(Effect::PushLocation(route.to_location()));
        }
        self.input.clear();
        self.mark_dirty();

        if let Route::Preview { target } = &route {
            let target = match target {
                Some(target) => Some(target.clone()),
                None if self.config.demo_fallback => TargetUrl::parse(&self.config.demo_domain),
                None => None,
            };
            match target {
                Some(target) => {
                    snap_info!("Opening preview of {}", target);
                    self.route = route;
                    self.preview = Some(PreviewState::mount(
                        target,
                        &self.config,
                        &mut self.tickets,
                        effects,
                    ));
                }
                None => {
                    snap_info!("Preview opened without a target; redirecting to entry");
                    self.route = Route::Entry;
                    effects.push(Effect::ReplaceLocation(Route::Entry.to_location()));
                }
            }
            return;
        }

        snap_debug!("Route changed to {:?}", route);
        self.route = route;
    }

    pub(crate) fn with_preview<R>(
        &mut self,
        apply: impl FnOnce(&mut PreviewState, &PreviewConfig, &mut TicketCounter) -> R,
    ) -> Option<R> {
        let preview = self.preview.as_mut()?;
        Some(apply(preview, &self.config, &mut self.tickets))
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match (&self.route, &self.preview) {
            (Route::NotFound { path }, _) => ScreenView::NotFound { path: path.clone() },
            (Route::Preview { .. }, Some(preview)) => ScreenView::Preview(self.preview_view(preview)),
            _ => ScreenView::Entry(EntryView {
                input: self.input.clone(),
                can_submit: !self.input.trim().is_empty(),
            }),
        };
        AppViewModel {
            screen,
            viewport_width: self.viewport_width,
            dirty: self.dirty,
        }
    }

    fn preview_view(&self, preview: &PreviewState) -> PreviewView {
        let display = preview.display();
        let body = match preview.load_state() {
            LoadState::Loading => PreviewBody::Loading {
                caption: format!("Loading {display}..."),
            },
            LoadState::Ready => match preview.strategy(&self.config) {
                RenderStrategy::StaticMock => PreviewBody::StaticMock {
                    asset: self.config.mock_asset.clone(),
                },
                RenderStrategy::EmbeddedExternal => {
                    PreviewBody::Embedded(self.embedded_view(preview))
                }
            },
        };

        PreviewView {
            title: display.host_label().to_string(),
            display_url: display.to_string(),
            mode: preview.mode(),
            load_state: preview.load_state(),
            refresh_spinning: preview.load_state() == LoadState::Loading,
            body,
        }
    }

    fn embedded_view(&self, preview: &PreviewState) -> EmbeddedFrameView {
        let src = preview.target().to_string();
        let (interactive, canvas) = match preview.mode() {
            ViewportMode::Mobile => (false, None),
            ViewportMode::Desktop => (
                true,
                Some(DesktopCanvas {
                    width: self.config.desktop_canvas_width,
                    scale: desktop_scale(self.viewport_width),
                }),
            ),
        };
        EmbeddedFrameView {
            src: src.clone(),
            ticket: preview.ticket(),
            sandbox: sandbox_attribute(),
            interactive,
            canvas,
            overlay: SecurityOverlay {
                title: OVERLAY_TITLE,
                message: OVERLAY_MESSAGE,
                action_label: OVERLAY_ACTION,
                escape_url: src,
            },
        }
    }
}
