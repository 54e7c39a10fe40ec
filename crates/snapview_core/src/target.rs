use std::fmt;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Scheme-qualified URL the user asked to preview.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetUrl(String);

impl TargetUrl {
    /// Normalizes free-form input into a target URL.
    ///
    /// Returns `None` for empty or whitespace-only input. Input without an
    /// `http://` or `https://` prefix gets `https://` prepended.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if strip_scheme(trimmed).is_some() {
            Some(Self(trimmed.to_string()))
        } else {
            Some(Self(format!("{HTTPS_PREFIX}{trimmed}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn display(&self) -> DisplayUrl {
        DisplayUrl::from_target(self)
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable form of a [`TargetUrl`]: no scheme, no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayUrl(String);

impl DisplayUrl {
    pub fn from_target(target: &TargetUrl) -> Self {
        let without_scheme = strip_scheme(target.as_str()).unwrap_or(target.as_str());
        let without_slash = without_scheme.strip_suffix('/').unwrap_or(without_scheme);
        Self(without_slash.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First path segment, shown as the preview header title.
    pub fn host_label(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// True when the host is `demo_domain` or one of its subdomains.
    pub fn is_demo_domain(&self, demo_domain: &str) -> bool {
        let demo = demo_domain.trim().trim_end_matches('.');
        if demo.is_empty() {
            return false;
        }
        let host = bare_host(self.host_label()).to_ascii_lowercase();
        let demo = demo.to_ascii_lowercase();
        host == demo || host.ends_with(&format!(".{demo}"))
    }
}

impl fmt::Display for DisplayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn strip_scheme(url: &str) -> Option<&str> {
    [HTTPS_PREFIX, HTTP_PREFIX].iter().find_map(|prefix| {
        url.get(..prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .map(|_| &url[prefix.len()..])
    })
}

/// Drops userinfo, port, query and fragment from a host label.
fn bare_host(label: &str) -> &str {
    let label = label.split(['?', '#']).next().unwrap_or_default();
    let label = label.rsplit('@').next().unwrap_or_default();
    let label = label.split(':').next().unwrap_or_default();
    label.trim_end_matches('.')
}
