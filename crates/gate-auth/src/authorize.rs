//! OAuth authorization URL construction.
//!
//! Builds `{frontend}/oauth/authorize?provider=..&redirect_uri=..&state=..`.
//! Only `redirect_uri` is percent-encoded; `provider` and `state` are copied
//! verbatim, so callers must keep them to URL-safe tokens. Use
//! [`AuthorizationRequest::new`] to have that checked.

use std::fmt;

use crate::error::AuthError;

/// Path appended to the frontend endpoint.
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";

/// Smallest accepted random state token, in bytes.
pub const MIN_STATE_BYTES: usize = 8;

/// Clerk frontend endpoint with an explicit scheme and no trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendEndpoint(String);

impl FrontendEndpoint {
    /// Normalize a configured endpoint.
    ///
    /// A missing scheme defaults to `https://`. Exactly one trailing `/` is
    /// stripped. Never fails: an empty input yields a malformed endpoint,
    /// which configuration validation is expected to catch first.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let with_scheme = if raw.starts_with("https://") || raw.starts_with("http://") {
            raw.to_owned()
        } else {
            format!("https://{raw}")
        };

        match with_scheme.strip_suffix('/') {
            Some(stripped) => Self(stripped.to_owned()),
            None => Self(with_scheme),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Authorization URL with query parameters in fixed order.
    #[must_use]
    pub fn authorize_url(&self, provider: &str, redirect_uri: &str, state: &str) -> String {
        format!(
            "{base}{AUTHORIZE_PATH}?provider={provider}&redirect_uri={redirect}&state={state}",
            base = self.0,
            redirect = urlencoding::encode(redirect_uri),
        )
    }
}

impl fmt::Display for FrontendEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the OAuth authorization URL for a provider sign-in.
///
/// Pure string construction; performs no I/O and never fails.
#[must_use]
pub fn build_authorization_url(
    base_endpoint: &str,
    provider: &str,
    redirect_uri: &str,
    state: &str,
) -> String {
    FrontendEndpoint::new(base_endpoint).authorize_url(provider, redirect_uri, state)
}

/// One OAuth initiation: provider, callback target, and anti-forgery state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    provider: String,
    redirect_uri: String,
    state: String,
}

impl AuthorizationRequest {
    /// Build a request whose raw query values are known to be URL-safe.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidRequest` if `provider` or `state` is empty or
    /// contains characters outside the RFC 3986 unreserved set, or if
    /// `redirect_uri` is empty.
    pub fn new(provider: &str, redirect_uri: &str, state: &str) -> Result<Self, AuthError> {
        check_raw_token("provider", provider)?;
        check_raw_token("state", state)?;
        if redirect_uri.trim().is_empty() {
            return Err(AuthError::InvalidRequest("redirect_uri is empty".into()));
        }

        Ok(Self {
            provider: provider.to_owned(),
            redirect_uri: redirect_uri.to_owned(),
            state: state.to_owned(),
        })
    }

    /// Build a request with a freshly generated state token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::StateGeneration` if the OS RNG fails or
    /// `state_bytes` is below [`MIN_STATE_BYTES`], and
    /// `AuthError::InvalidRequest` for an unsafe provider or empty redirect.
    pub fn with_random_state(
        provider: &str,
        redirect_uri: &str,
        state_bytes: usize,
    ) -> Result<Self, AuthError> {
        let state = generate_state(state_bytes)?;
        Self::new(provider, redirect_uri, &state)
    }

    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    #[must_use]
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// The state token the callback must echo back.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn authorize_url(&self, endpoint: &FrontendEndpoint) -> String {
        tracing::debug!(provider = %self.provider, endpoint = %endpoint, "building authorization url");
        endpoint.authorize_url(&self.provider, &self.redirect_uri, &self.state)
    }

    /// Constant-time comparison of a callback's `state` against this request.
    #[must_use]
    pub fn state_matches(&self, returned: &str) -> bool {
        let expected = self.state.as_bytes();
        let returned = returned.as_bytes();
        if expected.len() != returned.len() {
            return false;
        }
        expected
            .iter()
            .zip(returned)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

/// Generate a cryptographically random hex state token of `bytes` random bytes.
///
/// # Errors
///
/// Returns `AuthError::StateGeneration` if `bytes < MIN_STATE_BYTES` or the
/// OS RNG is unavailable.
pub fn generate_state(bytes: usize) -> Result<String, AuthError> {
    if bytes < MIN_STATE_BYTES {
        return Err(AuthError::StateGeneration(format!(
            "{bytes} bytes is below the minimum of {MIN_STATE_BYTES}"
        )));
    }

    let mut nonce = vec![0u8; bytes];
    getrandom::fill(&mut nonce).map_err(|e| AuthError::StateGeneration(e.to_string()))?;
    Ok(nonce.iter().map(|b| format!("{b:02x}")).collect())
}

fn check_raw_token(name: &str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::InvalidRequest(format!("{name} is empty")));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')))
    {
        return Err(AuthError::InvalidRequest(format!(
            "{name} contains '{bad}', which would need percent-encoding"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn builds_reference_url() {
        let url = build_authorization_url(
            "humble-monkey-3.clerk.accounts.dev",
            "google",
            "https://app.example.com/cb",
            "xyz",
        );
        assert_eq!(
            url,
            "https://humble-monkey-3.clerk.accounts.dev/oauth/authorize?provider=google&redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&state=xyz"
        );
    }

    #[rstest]
    #[case::bare_host("clerk.example.com", "https://clerk.example.com")]
    #[case::https("https://clerk.example.com", "https://clerk.example.com")]
    #[case::http_kept("http://localhost:3000", "http://localhost:3000")]
    #[case::trailing_slash("clerk.example.com/", "https://clerk.example.com")]
    #[case::https_trailing_slash("https://clerk.example.com/", "https://clerk.example.com")]
    #[case::only_one_slash_stripped("https://clerk.example.com//", "https://clerk.example.com/")]
    #[case::path_prefix("https://example.com/__clerk/", "https://example.com/__clerk")]
    fn normalizes_endpoint(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(FrontendEndpoint::new(raw).as_str(), expected);
    }

    #[rstest]
    #[case("clerk.example.com")]
    #[case("clerk.example.com/")]
    #[case("accounts.example.org/")]
    fn scheme_less_endpoints_default_to_https(#[case] raw: &str) {
        let url = build_authorization_url(raw, "github", "https://a.test/cb", "s1");
        assert!(url.starts_with("https://"), "{url}");
        assert!(!url.contains("//oauth/authorize"), "{url}");
    }

    #[test]
    fn empty_endpoint_yields_host_less_url() {
        let url = build_authorization_url("", "google", "https://a.test/cb", "s");
        assert_eq!(
            url,
            "https://oauth/authorize?provider=google&redirect_uri=https%3A%2F%2Fa.test%2Fcb&state=s"
        );
    }

    #[test]
    fn redirect_uri_is_percent_encoded_utf8() {
        let url = build_authorization_url(
            "clerk.example.com",
            "google",
            "https://app.example.com/cb?next=/dash board&lang=é",
            "st",
        );
        assert!(url.contains(
            "redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb%3Fnext%3D%2Fdash%20board%26lang%3D%C3%A9&state=st"
        ));
    }

    #[test]
    fn provider_and_state_are_verbatim() {
        let url = build_authorization_url("clerk.example.com", "oauth_google", "x", "a.b~c-d_e");
        assert!(url.contains("?provider=oauth_google&"));
        assert!(url.ends_with("&state=a.b~c-d_e"));
    }

    #[test]
    fn query_order_is_fixed() {
        let url = build_authorization_url("clerk.example.com", "p", "r", "s");
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        let keys: Vec<&str> = query
            .split('&')
            .filter_map(|pair| pair.split_once('=').map(|(k, _)| k))
            .collect();
        assert_eq!(keys, vec!["provider", "redirect_uri", "state"]);
    }

    #[test]
    fn request_produces_same_url_as_free_function() {
        let request =
            AuthorizationRequest::new("google", "https://app.example.com/cb", "xyz").unwrap();
        let endpoint = FrontendEndpoint::new("humble-monkey-3.clerk.accounts.dev");
        assert_eq!(
            request.authorize_url(&endpoint),
            build_authorization_url(
                "humble-monkey-3.clerk.accounts.dev",
                "google",
                "https://app.example.com/cb",
                "xyz"
            )
        );
    }

    #[rstest]
    #[case::space_in_provider("goo gle", "xyz")]
    #[case::ampersand_in_provider("google&x=1", "xyz")]
    #[case::empty_provider("", "xyz")]
    #[case::hash_in_state("google", "a#b")]
    #[case::empty_state("google", "")]
    fn request_rejects_unsafe_raw_values(#[case] provider: &str, #[case] state: &str) {
        let result = AuthorizationRequest::new(provider, "https://app.example.com/cb", state);
        assert!(matches!(result, Err(AuthError::InvalidRequest(_))));
    }

    #[test]
    fn request_rejects_empty_redirect() {
        assert!(AuthorizationRequest::new("google", " ", "xyz").is_err());
    }

    #[test]
    fn generated_state_is_hex_of_requested_length() {
        let state = generate_state(16).unwrap();
        assert_eq!(state.len(), 32);
        assert!(state.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(state, generate_state(16).unwrap());
    }

    #[test]
    fn short_state_is_rejected() {
        assert!(matches!(
            generate_state(4),
            Err(AuthError::StateGeneration(_))
        ));
    }

    #[test]
    fn random_state_request_round_trips_state() {
        let request =
            AuthorizationRequest::with_random_state("google", "https://app.example.com/cb", 16)
                .unwrap();
        let url = request.authorize_url(&FrontendEndpoint::new("clerk.example.com"));
        assert!(url.ends_with(&format!("&state={}", request.state())));
        assert!(request.state_matches(request.state()));
        assert!(!request.state_matches("forged"));
        assert!(!request.state_matches(""));
    }
}
