use pretty_assertions::assert_eq;
use snapview_core::{
    select_strategy, update, AppState, DesktopCanvas, DisplayUrl, EmbeddedFrameView, LoadState,
    LoadTicket, Msg, PreviewBody, PreviewView, RenderStrategy, ScreenView, SecurityOverlay,
    TargetUrl, ViewportMode, OVERLAY_ACTION, OVERLAY_MESSAGE, OVERLAY_TITLE,
};

const DEMO: &str = "stripe.com";

fn display(raw: &str) -> DisplayUrl {
    TargetUrl::parse(raw).expect("non-empty").display()
}

fn ready_preview(input: &str, mode: ViewportMode) -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged(input.to_string()));
    let (state, _) = update(state, Msg::Submitted);
    let (state, _) = update(state, Msg::ModeSelected(mode));
    let ticket = state.preview().unwrap().ticket();
    let (state, _) = update(state, Msg::LoadTimerFired { ticket });
    state
}

fn preview_view(state: &AppState) -> PreviewView {
    match state.view().screen {
        ScreenView::Preview(view) => view,
        other => panic!("expected preview view, got {other:?}"),
    }
}

#[test]
fn strategy_table_is_exhaustive() {
    let cases = [
        ("stripe.com", ViewportMode::Mobile, RenderStrategy::StaticMock),
        ("stripe.com", ViewportMode::Desktop, RenderStrategy::EmbeddedExternal),
        ("example.com", ViewportMode::Mobile, RenderStrategy::EmbeddedExternal),
        ("example.com", ViewportMode::Desktop, RenderStrategy::EmbeddedExternal),
    ];
    for (raw, mode, expected) in cases {
        assert_eq!(
            select_strategy(&display(raw), mode, DEMO),
            expected,
            "{raw} in {mode:?}"
        );
    }
}

#[test]
fn demo_domain_matching_is_host_based() {
    assert!(display("stripe.com").is_demo_domain(DEMO));
    assert!(display("https://STRIPE.com/pricing").is_demo_domain(DEMO));
    assert!(display("dashboard.stripe.com").is_demo_domain(DEMO));
    assert!(display("stripe.com:443").is_demo_domain(DEMO));
    assert!(!display("notstripe.com").is_demo_domain(DEMO));
    assert!(!display("example.com/stripe.com").is_demo_domain(DEMO));
    assert!(!display("stripe.com.evil.net").is_demo_domain(DEMO));
    assert!(!display("stripe.com").is_demo_domain(""));
}

#[test]
fn display_url_strips_scheme_and_one_trailing_slash() {
    assert_eq!(display("https://example.com/").as_str(), "example.com");
    assert_eq!(display("http://example.com/a/").as_str(), "example.com/a");
    assert_eq!(display("example.com").as_str(), "example.com");
    assert_eq!(display("HTTPS://Example.com").as_str(), "Example.com");
    assert_eq!(display("example.com/a/b").host_label(), "example.com");
}

#[test]
fn mobile_embed_is_display_only() {
    let state = ready_preview("example.com/docs", ViewportMode::Mobile);
    let view = preview_view(&state);

    assert_eq!(view.title, "example.com");
    assert_eq!(view.display_url, "example.com/docs");
    assert_eq!(view.load_state, LoadState::Ready);
    assert_eq!(
        view.body,
        PreviewBody::Embedded(EmbeddedFrameView {
            src: "https://example.com/docs".to_string(),
            ticket: LoadTicket::new(1),
            sandbox: "allow-scripts allow-same-origin".to_string(),
            interactive: false,
            canvas: None,
            overlay: SecurityOverlay {
                title: OVERLAY_TITLE,
                message: OVERLAY_MESSAGE,
                action_label: OVERLAY_ACTION,
                escape_url: "https://example.com/docs".to_string(),
            },
        })
    );
}

#[test]
fn desktop_embed_is_interactive_and_scaled() {
    let state = ready_preview("stripe.com", ViewportMode::Desktop);
    let PreviewBody::Embedded(frame) = preview_view(&state).body else {
        panic!("expected embedded frame");
    };
    assert!(frame.interactive);
    assert_eq!(
        frame.canvas,
        Some(DesktopCanvas {
            width: 1024,
            scale: 0.4
        })
    );
    assert_eq!(frame.overlay.escape_url, "https://stripe.com");

    let (state, _) = update(state, Msg::ViewportResized(800));
    let PreviewBody::Embedded(frame) = preview_view(&state).body else {
        panic!("expected embedded frame");
    };
    assert_eq!(frame.canvas.map(|canvas| canvas.scale), Some(0.7));
}

#[test]
fn static_mock_uses_configured_asset() {
    let state = ready_preview("stripe.com", ViewportMode::Mobile);
    assert_eq!(
        preview_view(&state).body,
        PreviewBody::StaticMock {
            asset: state.config().mock_asset.clone()
        }
    );
}
