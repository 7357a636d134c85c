//! Submission endpoint selection.

use std::borrow::Cow;

/// Endpoint used when the page is served from `localhost`.
pub const LOCAL_ENDPOINT: &str = "http://localhost:3000/api/contact";
/// Endpoint used from every other host.
pub const PUBLIC_ENDPOINT: &str = "https://autoreportform.click/api/contact";
/// Path of the contact route below a server base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// Absolute URL the form posts its payload to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// Local development server.
    pub const fn local() -> Self {
        Self(Cow::Borrowed(LOCAL_ENDPOINT))
    }

    /// Production deployment.
    pub const fn public() -> Self {
        Self(Cow::Borrowed(PUBLIC_ENDPOINT))
    }

    /// Contact route of the server at `base`, such as `http://127.0.0.1:8080`.
    ///
    /// # Examples
    /// ```
    /// use contact_backend::client::Endpoint;
    ///
    /// let endpoint = Endpoint::from_base("http://127.0.0.1:8080/");
    /// assert_eq!(endpoint.as_str(), "http://127.0.0.1:8080/api/contact");
    /// ```
    pub fn from_base(base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        Self(Cow::Owned(format!("{base}{CONTACT_PATH}")))
    }

    /// Choose the endpoint for a page served from `hostname`.
    ///
    /// # Examples
    /// ```
    /// use contact_backend::client::Endpoint;
    ///
    /// assert_eq!(Endpoint::for_hostname("localhost"), Endpoint::local());
    /// assert_eq!(Endpoint::for_hostname("autoreportform.click"), Endpoint::public());
    /// ```
    pub fn for_hostname(hostname: &str) -> Self {
        if hostname == "localhost" {
            Self::local()
        } else {
            Self::public()
        }
    }

    /// Absolute URL of the contact endpoint.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("localhost", LOCAL_ENDPOINT)]
    #[case("autoreportform.click", PUBLIC_ENDPOINT)]
    #[case("www.autoreportform.click", PUBLIC_ENDPOINT)]
    #[case("127.0.0.1", PUBLIC_ENDPOINT)]
    fn hostname_selects_endpoint(#[case] hostname: &str, #[case] expected: &str) {
        assert_eq!(Endpoint::for_hostname(hostname).as_str(), expected);
    }

    #[rstest]
    #[case("http://127.0.0.1:8080")]
    #[case("http://127.0.0.1:8080/")]
    fn base_url_gains_contact_path(#[case] base: &str) {
        assert_eq!(
            Endpoint::from_base(base).as_str(),
            "http://127.0.0.1:8080/api/contact"
        );
    }
}
