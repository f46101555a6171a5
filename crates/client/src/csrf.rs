//! The anti-forgery request interceptor.
//!
//! The stronger backend protects every non-safe method with a token it
//! hands out in the `csrftoken` cookie and expects back in the
//! `X-CSRFToken` header. Every request of [crate::ApiClient] is sent
//! through [CsrfSend], which inspects the method and injects the header
//! where it is required.

use reqwest::Url;
use reqwest::blocking::RequestBuilder;
use reqwest::blocking::Response;
use reqwest::cookie::CookieStore;
use reqwest::cookie::Jar;

use crate::error::ApiError;
use crate::error::Result;

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

pub(crate) trait CsrfSend {
    fn csrf_send(self, cookies: &Jar) -> Result<Response>;
}

impl CsrfSend for RequestBuilder {
    fn csrf_send(self, cookies: &Jar) -> Result<Response> {
        // Build the Request object to read the method and the URL the
        // interception decision needs, without cloning the builder.
        let (client, request) = self.build_split();
        let request = request?;

        if is_safe_method(request.method().as_str()) {
            return Ok(client.execute(request)?);
        }

        let Some(token) = csrf_token(cookies, request.url()) else {
            return Err(ApiError::MissingCsrfToken);
        };

        let request_builder = RequestBuilder::from_parts(client, request);
        let response = request_builder.header(CSRF_HEADER, token).send()?;

        Ok(response)
    }
}

/// These HTTP methods do not require anti-forgery protection.
fn is_safe_method(method: &str) -> bool {
    matches!(method, "GET" | "HEAD" | "OPTIONS" | "TRACE")
}

fn csrf_token(cookies: &Jar, url: &Url) -> Option<String> {
    let header = cookies.cookies(url)?;
    let header = header.to_str().ok()?;

    header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == CSRF_COOKIE).then(|| value.to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_methods_skip_the_token() {
        for method in ["GET", "HEAD", "OPTIONS", "TRACE"] {
            assert!(is_safe_method(method), "{method} must be safe");
        }

        for method in ["POST", "PUT", "PATCH", "DELETE"] {
            assert!(!is_safe_method(method), "{method} must carry the token");
        }
    }

    #[test]
    fn read_the_token_from_the_cookie_jar() {
        let url = Url::parse("http://localhost:8000/api/bodyweight").unwrap();
        let cookies = Jar::default();
        cookies.add_cookie_str("sessionid=abc123", &url);
        cookies.add_cookie_str("csrftoken=sup3rs3cret", &url);

        assert_eq!(csrf_token(&cookies, &url), Some(String::from("sup3rs3cret")));
    }

    #[test]
    fn missing_token_yields_none() {
        let url = Url::parse("http://localhost:8000/api/bodyweight").unwrap();
        let cookies = Jar::default();
        cookies.add_cookie_str("sessionid=abc123", &url);

        assert_eq!(csrf_token(&cookies, &url), None);
    }
}
