// ── Page-scoped collaborators ──
//
// Read-only inputs the request client consults before each request: the
// anti-forgery token and the APOD currently on display. Both are passed in
// explicitly rather than read from ambient page state.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use secrecy::SecretString;

use crate::model::ApodPayload;

// ── Anti-forgery token ───────────────────────────────────────────────

/// Source of the page's anti-forgery token, read synchronously per request.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<SecretString>;
}

/// A token issued once for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct StaticToken(SecretString);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<SecretString> {
        Some(self.0.clone())
    }
}

/// No token on the page; requests carry an empty header.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<SecretString> {
        None
    }
}

// ── Page extraction ──────────────────────────────────────────────────

/// Fallback that reads an APOD payload off the rendered page.
pub trait PageExtractor: Send + Sync {
    fn extract_apod(&self) -> Option<ApodPayload>;
}

/// Text captured from the APOD page's known display regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Page heading (the APOD title).
    pub heading: Option<String>,
    /// Explanation paragraph.
    pub explanation: Option<String>,
    /// `src` of the displayed image.
    pub image_src: Option<String>,
    /// Value of the date picker input.
    pub date_input: Option<String>,
}

impl PageExtractor for PageSnapshot {
    fn extract_apod(&self) -> Option<ApodPayload> {
        if self.heading.is_none()
            && self.explanation.is_none()
            && self.image_src.is_none()
            && self.date_input.is_none()
        {
            return None;
        }

        let text = |field: &Option<String>| field.as_deref().map(str::trim).unwrap_or_default().to_owned();

        Some(ApodPayload {
            title: text(&self.heading),
            explanation: text(&self.explanation),
            url: text(&self.image_src),
            date: text(&self.date_input),
            media_type: "image".into(),
        })
    }
}

// ── Current APOD ─────────────────────────────────────────────────────

/// The APOD on display, plus a page-extraction fallback.
#[derive(Default)]
pub struct ApodContext {
    current: ArcSwapOption<ApodPayload>,
    page: Option<Arc<dyn PageExtractor>>,
}

impl ApodContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that falls back to `page` when no current item is set.
    pub fn with_page(page: Arc<dyn PageExtractor>) -> Self {
        Self {
            current: ArcSwapOption::empty(),
            page: Some(page),
        }
    }

    pub fn set_current(&self, payload: ApodPayload) {
        self.current.store(Some(Arc::new(payload)));
    }

    pub fn clear_current(&self) {
        self.current.store(None);
    }

    pub fn current(&self) -> Option<Arc<ApodPayload>> {
        self.current.load_full()
    }

    /// The current item, else whatever the page yields.
    pub fn resolve(&self) -> Option<ApodPayload> {
        if let Some(current) = self.current() {
            return Some(ApodPayload::clone(&current));
        }
        self.page.as_ref().and_then(|page| page.extract_apod())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn apod(title: &str) -> ApodPayload {
        ApodPayload {
            title: title.into(),
            explanation: "A nebula.".into(),
            url: "https://apod.nasa.gov/image/pillars.jpg".into(),
            date: "2024-03-01".into(),
            media_type: "image".into(),
        }
    }

    #[test]
    fn static_token_is_returned_every_time() {
        let source = StaticToken::new("abc");
        assert_eq!(source.token().unwrap().expose_secret(), "abc");
        assert_eq!(source.token().unwrap().expose_secret(), "abc");
        assert!(NoToken.token().is_none());
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert_eq!(PageSnapshot::default().extract_apod(), None);
    }

    #[test]
    fn partial_page_defaults_missing_fields() {
        let page = PageSnapshot {
            heading: Some("  Pillars of Creation \n".into()),
            image_src: Some("https://apod.nasa.gov/image/pillars.jpg".into()),
            ..PageSnapshot::default()
        };
        let payload = page.extract_apod().unwrap();
        assert_eq!(payload.title, "Pillars of Creation");
        assert_eq!(payload.explanation, "");
        assert_eq!(payload.date, "");
        assert_eq!(payload.media_type, "image");
    }

    #[test]
    fn current_item_wins_over_page() {
        let page = PageSnapshot {
            heading: Some("From page".into()),
            ..PageSnapshot::default()
        };
        let ctx = ApodContext::with_page(Arc::new(page));
        assert_eq!(ctx.resolve().unwrap().title, "From page");

        ctx.set_current(apod("From context"));
        assert_eq!(ctx.resolve().unwrap().title, "From context");

        ctx.clear_current();
        assert_eq!(ctx.resolve().unwrap().title, "From page");
    }

    #[test]
    fn bare_context_resolves_nothing() {
        assert!(ApodContext::new().resolve().is_none());
    }
}
