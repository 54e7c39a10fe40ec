use snapview_core::{FrameOutcome, LoadTicket, Msg, ViewportMode};

pub const HELP: &[&str] = &[
    "Entry view: type a URL and press Enter to load it.",
    "  load <url>      load a URL from any view",
    "Preview view:",
    "  mobile | desktop   switch viewport",
    "  refresh            reload the preview",
    "  capture            capture the page",
    "  browser            open the page in the system browser",
    "  frame ok|fail      report the embedded frame result",
    "  back               return to the entry view",
    "Anywhere:",
    "  go <location>      jump to a location, e.g. /preview?url=...",
    "  history            browser-style back",
    "  width <px>         set the viewport width",
    "  help | quit",
];

/// What the terminal knows about the current screen when parsing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    pub on_entry: bool,
    /// Ticket of the mounted preview, if any.
    pub ticket: Option<LoadTicket>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    /// Moves the host to a new location, then reports it to the core.
    Navigate(String),
    HistoryBack,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str, ctx: CommandContext) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match (word.to_ascii_lowercase().as_str(), rest) {
        ("quit" | "exit" | ":q", "") => Command::Quit,
        ("help" | "?", "") => Command::Help,
        ("history", "") => Command::HistoryBack,
        ("back", "") => dispatch(Msg::BackClicked),
        ("mobile", "") => dispatch(Msg::ModeSelected(ViewportMode::Mobile)),
        ("desktop", "") => dispatch(Msg::ModeSelected(ViewportMode::Desktop)),
        ("refresh" | "r", "") => dispatch(Msg::RefreshClicked),
        ("capture" | "c", "") => dispatch(Msg::CaptureClicked),
        ("browser", "") => dispatch(Msg::OpenInBrowserClicked),
        ("go", location) if !location.is_empty() => Command::Navigate(location.to_string()),
        ("width", px) => match px.parse::<u32>() {
            Ok(width) => dispatch(Msg::ViewportResized(width)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        ("frame", outcome) => match (ctx.ticket, frame_outcome(outcome)) {
            (Some(ticket), Some(outcome)) => dispatch(Msg::FrameSettled { ticket, outcome }),
            _ => Command::Unknown(line.to_string()),
        },
        ("load", url) => {
            let mut msgs = Vec::new();
            if !ctx.on_entry {
                msgs.push(Msg::BackClicked);
            }
            msgs.push(Msg::InputChanged(url.to_string()));
            msgs.push(Msg::Submitted);
            Command::Dispatch(msgs)
        }
        _ if ctx.on_entry => Command::Dispatch(vec![
            Msg::InputChanged(line.to_string()),
            Msg::Submitted,
        ]),
        _ => Command::Unknown(line.to_string()),
    }
}

fn dispatch(msg: Msg) -> Command {
    Command::Dispatch(vec![msg])
}

fn frame_outcome(word: &str) -> Option<FrameOutcome> {
    match word.to_ascii_lowercase().as_str() {
        "ok" | "loaded" => Some(FrameOutcome::Loaded),
        "fail" | "error" => Some(FrameOutcome::Failed),
        _ => None,
    }
}
