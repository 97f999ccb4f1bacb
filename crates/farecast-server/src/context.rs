// File: src/context.rs
// Purpose: Per-request context handed to route handlers

use axum::http::{HeaderMap, Method};
use farecast_router::SegmentValue;
use std::collections::HashMap;

/// Decoded form fields from an urlencoded request body
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` body
    ///
    /// Pairs that fail percent-decoding are dropped rather than
    /// aborting the whole form.
    pub fn from_urlencoded(body: &str) -> Self {
        let fields = body
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter_map(|(k, v)| {
                let key = urlencoding::decode(k).ok()?;
                let value = urlencoding::decode(v).ok()?;
                Some((key.to_string(), value.to_string()))
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }
}

/// Everything a handler needs about the current request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    /// Typed route parameters extracted by the router
    pub params: HashMap<String, SegmentValue>,
    pub form: FormData,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn new(
        method: Method,
        path: String,
        params: HashMap<String, SegmentValue>,
        form: FormData,
        headers: HeaderMap,
    ) -> Self {
        Self {
            method,
            path,
            params,
            form,
            headers,
        }
    }
}
