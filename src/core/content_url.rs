//! URLs for raw file content and returned links.

use std::fmt;

use crate::config::RAW_ROUTE;

/// Builder for `/raw/{name}[?pw=..][&download=true]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentUrl<'a> {
    name: &'a str,
    password: Option<&'a str>,
    download: bool,
    host: Option<&'a str>,
}

impl<'a> ContentUrl<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            password: None,
            download: false,
            host: None,
        }
    }

    /// Attach an unlock credential; empty credentials are ignored.
    pub fn password(mut self, password: Option<&'a str>) -> Self {
        self.password = password.filter(|p| !p.is_empty());
        self
    }

    pub fn download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// Prefix with an absolute origin such as `https://example.com`.
    pub fn absolute(mut self, host: &'a str) -> Self {
        self.host = Some(host);
        self
    }
}

impl fmt::Display for ContentUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(host) = self.host {
            write!(f, "{}", host.trim_end_matches('/'))?;
        }
        write!(f, "{}/{}", RAW_ROUTE, urlencoding::encode(self.name))?;

        let mut sep = '?';
        if let Some(pw) = self.password {
            write!(f, "{}pw={}", sep, urlencoding::encode(pw))?;
            sep = '&';
        }
        if self.download {
            write!(f, "{}download=true", sep)?;
        }
        Ok(())
    }
}

/// Join a files route and a name (`/u` + `a.png` → `/u/a.png`, `/` + `a.png` → `/a.png`).
pub fn format_root_url(route: &str, name: &str) -> String {
    let route = route.trim_end_matches('/');
    format!("{}/{}", route, name)
}

/// Absolute "returned" link, as shared with others.
pub fn returned_url(host: &str, files_route: &str, name: &str) -> String {
    format!("{}{}", host, format_root_url(files_route, name))
}
