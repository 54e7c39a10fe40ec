use snapview_core::{
    AppViewModel, EmbeddedFrameView, EntryView, PreviewBody, PreviewView, ScreenView,
    ViewportMode,
};

use crate::terminal::effects::ActiveToast;

const INPUT_PLACEHOLDER: &str = "https://example.com";

/// Renders the view model as terminal lines.
pub fn render(
    view: &AppViewModel,
    location: &str,
    toasts: &[ActiveToast],
    notice: Option<&str>,
) -> Vec<String> {
    let mut lines = vec![format!("--- {location} ---")];

    match &view.screen {
        ScreenView::Entry(entry) => render_entry(entry, &mut lines),
        ScreenView::Preview(preview) => render_preview(preview, &mut lines),
        ScreenView::NotFound { path } => {
            lines.push("404 Page Not Found".to_string());
            lines.push(format!("Nothing lives at {path}. Type `back` to start over."));
        }
    }

    for active in toasts {
        lines.push(format!(
            "[{}] {} | {}",
            active.shown_at.format("%H:%M:%S"),
            active.toast.title,
            active.toast.description
        ));
    }
    if let Some(notice) = notice {
        lines.push(format!("! {notice}"));
    }
    lines
}

fn render_entry(entry: &EntryView, lines: &mut Vec<String>) {
    lines.push("New Screenshot".to_string());
    lines.push("Enter a website URL".to_string());
    let input = if entry.input.is_empty() {
        format!("({INPUT_PLACEHOLDER})")
    } else {
        entry.input.clone()
    };
    lines.push(format!("Website Address: {input}"));
    lines.push("Type a URL and press Enter to load the page.".to_string());
}

fn render_preview(preview: &PreviewView, lines: &mut Vec<String>) {
    let refresh = if preview.refresh_spinning {
        "refresh (spinning)"
    } else {
        "refresh"
    };
    lines.push(format!("< back | Secure {} | {refresh}", preview.title));
    lines.push(tab_strip(preview.mode));

    match &preview.body {
        PreviewBody::Loading { caption } => lines.push(format!("  ... {caption}")),
        PreviewBody::StaticMock { asset } => lines.push(format!("  [image] {asset}")),
        PreviewBody::Embedded(frame) => render_frame(frame, lines),
    }

    lines.push("[share] [Capture Full Page]".to_string());
}

fn render_frame(frame: &EmbeddedFrameView, lines: &mut Vec<String>) {
    let pointer = if frame.interactive { "auto" } else { "none" };
    lines.push(format!(
        "  [frame {}] {} sandbox=\"{}\" pointer-events={pointer}",
        frame.ticket, frame.src, frame.sandbox
    ));
    if let Some(canvas) = frame.canvas {
        lines.push(format!(
            "  canvas {}px scaled to {:.0}%",
            canvas.width,
            canvas.scale * 100.0
        ));
    }
    lines.push(format!("  {}: {}", frame.overlay.title, frame.overlay.message));
    lines.push(format!(
        "  [{}] -> {}",
        frame.overlay.action_label, frame.overlay.escape_url
    ));
}

fn tab_strip(mode: ViewportMode) -> String {
    [ViewportMode::Mobile, ViewportMode::Desktop]
        .into_iter()
        .map(|tab| {
            if tab == mode {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
