//! Routing-visible cookie modelling and parsing.

use crate::CookieJar;
use std::collections::HashMap;
use std::sync::Mutex;

/// SameSite cookie policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    /// Sent on same-origin navigations but not on cross-site POSTs.
    Lax,
    None,
}

impl SameSite {
    /// The attribute value as it appears in a Set-Cookie header.
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// A routing-visible cookie with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// Path attribute; defaults to `/`.
    pub path: String,
    /// Max-Age in seconds. Zero or negative expires the cookie immediately.
    pub max_age_secs: i64,
    pub same_site: SameSite,
}

impl Cookie {
    /// Create a cookie scoped to the whole site (path `/`).
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        max_age_secs: i64,
        same_site: SameSite,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: "/".to_string(),
            max_age_secs,
            same_site,
        }
    }

    /// Serialize to a Set-Cookie header value.
    pub fn to_set_cookie(&self) -> String {
        format!(
            "{}={}; Path={}; Max-Age={}; SameSite={}",
            self.name,
            self.value,
            self.path,
            self.max_age_secs,
            self.same_site.as_str()
        )
    }
}

/// In-memory cookie jar.
///
/// Mirrors browser semantics for the subset the client needs: setting a
/// cookie with a non-positive max-age removes it.
#[derive(Default)]
pub struct MemoryCookieJar {
    cookies: Mutex<HashMap<String, Cookie>>,
}

impl MemoryCookieJar {
    /// Create a new empty jar.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookieJar {
    fn set(&self, cookie: Cookie) {
        let mut cookies = self.cookies.lock().unwrap();
        if cookie.max_age_secs <= 0 {
            cookies.remove(&cookie.name);
        } else {
            cookies.insert(cookie.name.clone(), cookie);
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        let cookies = self.cookies.lock().unwrap();
        cookies.get(name).map(|cookie| cookie.value.clone())
    }

    fn expire(&self, name: &str) {
        let mut cookies = self.cookies.lock().unwrap();
        cookies.remove(name);
    }
}

/// Extract a cookie value from a `Cookie:` request header.
///
/// Values are percent-decoded the way a browser's cookie accessor would.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?;
        let value = parts.next()?;
        if key == name {
            Some(percent_decode(value))
        } else {
            None
        }
    })
}

/// Decode %XX escapes in a cookie value.
fn percent_decode(s: &str) -> String {
    let mut result = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                result.push(byte);
            }
        } else {
            let mut buf = [0u8; 4];
            result.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&result).to_string()
}
