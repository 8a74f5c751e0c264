use indexmap::IndexMap;
use once_cell::unsync::OnceCell;

use crate::constants::{header, mime};
use crate::request::Request;
use crate::response::Response;

/// Per-request view the middleware chain operates on.
///
/// Owns the request/response pair for the duration of one request. Query and
/// form parameters are decoded lazily on first access and cached; replacing
/// the request drops both caches.
pub struct RequestContext {
    request: Request,
    response: Response,
    query: OnceCell<IndexMap<String, String>>,
    form: OnceCell<IndexMap<String, String>>,
}

impl RequestContext {
    pub fn new(request: Request) -> Self {
        Self {
            request,
            response: Response::default(),
            query: OnceCell::new(),
            form: OnceCell::new(),
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        self.invalidate_caches();
        &mut self.request
    }

    pub fn set_request(&mut self, request: Request) {
        self.invalidate_caches();
        self.request = request;
    }

    pub fn take_request(&mut self) -> Request {
        self.invalidate_caches();
        std::mem::take(&mut self.request)
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }

    pub fn set_response(&mut self, response: Response) {
        self.response = response;
    }

    pub fn take_response(&mut self) -> Response {
        std::mem::take(&mut self.response)
    }

    pub fn method(&self) -> &str {
        self.request.method()
    }

    /// Replaces the request method in place. Cached query/form values stay
    /// valid since the rest of the request is untouched.
    pub fn set_method<S: Into<String>>(&mut self, method: S) {
        self.request.set_method(method);
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.request.header(name)
    }

    /// Returns the named query-string parameter, decoded. The first
    /// occurrence wins when a key repeats.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .get_or_init(|| parse_pairs(self.request.query()))
            .get(name)
            .map(String::as_str)
    }

    /// Returns the named field from the request body, parsed as
    /// `application/x-www-form-urlencoded` on first access.
    ///
    /// A missing or mismatched `Content-Type`, a non-UTF-8 body, or an
    /// undecodable body all degrade to `None`.
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .get_or_init(|| parse_form(&self.request))
            .get(name)
            .map(String::as_str)
    }

    fn invalidate_caches(&mut self) {
        self.query.take();
        self.form.take();
    }
}

fn parse_pairs(input: &str) -> IndexMap<String, String> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(input)
        .map(first_occurrence_wins)
        .unwrap_or_default()
}

fn parse_form(request: &Request) -> IndexMap<String, String> {
    if !has_form_content_type(request) {
        return IndexMap::new();
    }

    match std::str::from_utf8(request.body()) {
        Ok(body) => parse_pairs(body),
        Err(_) => IndexMap::new(),
    }
}

fn has_form_content_type(request: &Request) -> bool {
    request
        .header(header::CONTENT_TYPE)
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(mime::FORM_URLENCODED))
}

fn first_occurrence_wins(pairs: Vec<(String, String)>) -> IndexMap<String, String> {
    let mut map = IndexMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        map.entry(key).or_insert(value);
    }
    map
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
