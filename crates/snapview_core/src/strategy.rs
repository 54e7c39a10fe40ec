use crate::DisplayUrl;

/// Sandbox capabilities granted to the embedded frame. Nothing else is allowed.
pub const EMBED_SANDBOX: &[SandboxGrant] = &[SandboxGrant::Scripts, SandboxGrant::SameOrigin];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    #[default]
    Mobile,
    Desktop,
}

impl ViewportMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewportMode::Mobile => "Mobile",
            ViewportMode::Desktop => "Desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Bundled decorative image; needs no simulated load.
    StaticMock,
    /// Target rendered by a sandboxed external frame.
    EmbeddedExternal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxGrant {
    Scripts,
    SameOrigin,
}

impl SandboxGrant {
    pub fn token(self) -> &'static str {
        match self {
            SandboxGrant::Scripts => "allow-scripts",
            SandboxGrant::SameOrigin => "allow-same-origin",
        }
    }
}

/// Picks the render path for a display URL and viewport mode.
pub fn select_strategy(display: &DisplayUrl, mode: ViewportMode, demo_domain: &str) -> RenderStrategy {
    match (display.is_demo_domain(demo_domain), mode) {
        (true, ViewportMode::Mobile) => RenderStrategy::StaticMock,
        (true, ViewportMode::Desktop) | (false, _) => RenderStrategy::EmbeddedExternal,
    }
}

/// Scale applied to the fixed-width desktop canvas for a host viewport width.
pub fn desktop_scale(viewport_width: u32) -> f32 {
    match viewport_width {
        w if w >= 1024 => 1.0,
        w if w >= 768 => 0.7,
        w if w >= 640 => 0.5,
        _ => 0.4,
    }
}

/// Space-separated sandbox attribute value.
pub fn sandbox_attribute() -> String {
    EMBED_SANDBOX
        .iter()
        .map(|grant| grant.token())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{desktop_scale, sandbox_attribute};

    #[test]
    fn desktop_scale_steps_at_breakpoints() {
        assert_eq!(desktop_scale(0), 0.4);
        assert_eq!(desktop_scale(639), 0.4);
        assert_eq!(desktop_scale(640), 0.5);
        assert_eq!(desktop_scale(768), 0.7);
        assert_eq!(desktop_scale(1023), 0.7);
        assert_eq!(desktop_scale(1024), 1.0);
        assert_eq!(desktop_scale(2560), 1.0);
    }

    #[test]
    fn sandbox_grants_only_scripts_and_same_origin() {
        assert_eq!(sandbox_attribute(), "allow-scripts allow-same-origin");
    }
}
