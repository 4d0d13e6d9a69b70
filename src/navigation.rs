//! Navigation capability for the unauthorized-redirect path.
//!
//! Reading the current location and triggering navigation are hosting
//! environment concerns. They are injected as a capability rather than read
//! from ambient global state so the redirect path stays testable.

/// Injected navigation capability.
///
/// Used only when a 401 response meets a configured redirect template: the
/// helper reads [`current_location`](Navigator::current_location),
/// percent-encodes it into the template's `:returnUrl` token, and calls
/// [`navigate_to`](Navigator::navigate_to). Navigation is a terminal side
/// effect — the hosting environment is assumed to abandon the call after it.
pub trait Navigator: Send + Sync {
    /// The location to return to after re-authentication.
    fn current_location(&self) -> String;

    /// Trigger navigation to `url`.
    fn navigate_to(&self, url: &str);
}
