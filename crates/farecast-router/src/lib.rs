//! # Farecast Router
//!
//! URL routing with typed path-segment converters:
//! - Static routes (`/homePost`)
//! - Dynamic parameters with converters (`/results/{ticket:int}/{fare:float}`)
//! - Named routes with reverse URL generation (`url_for`)
//!
//! A converter gates a segment with an anchored regex and turns it
//! into a typed value ([`SegmentValue`]). A segment that fails its
//! converter means the route does not match at all — the caller sees
//! no match and can answer 404, there is no converter-level error.
//!
//! ## Path Normalization
//!
//! Handles all common user mistakes gracefully:
//! - Trailing slashes: `/homePost/` → `/homePost`
//! - Double slashes: `/results//5` → `/results/5`
//! - Backslashes: `\results\5` → `/results/5`
//!
//! ## Example
//!
//! ```
//! use farecast_router::{Route, Router};
//!
//! let router = Router::new()
//!     .with_route(Route::parse("/").unwrap().with_name("home"))
//!     .with_route(
//!         Route::parse("/results/{ticket:int}/{fare:float}")
//!             .unwrap()
//!             .with_name("results"),
//!     );
//!
//! let m = router.match_route("/results/5/12.00").unwrap();
//! assert_eq!(m.params.get("ticket").unwrap().as_int(), Some(5));
//! assert_eq!(m.params.get("fare").unwrap().as_float(), Some(12.0));
//! ```

use std::collections::HashMap;

pub mod convert;
pub mod path;
pub mod pattern;

pub use convert::{Converter, SegmentValue};
pub use path::{is_valid_path, normalize_path};
pub use pattern::{classify_segment, parse_pattern, PatternError, PatternSegment};

/// Represents a single route with its pattern, parsed segments, and name
#[derive(Debug, Clone)]
pub struct Route {
    /// URL pattern like `/results/{ticket:int}/{fare:float}`
    pub pattern: String,
    /// Parsed pattern segments, in order
    pub segments: Vec<PatternSegment>,
    /// Parameter names, in pattern order
    pub params: Vec<String>,
    /// Optional name for reverse URL generation
    pub name: Option<String>,
    /// Priority for matching (lower = higher priority)
    pub priority: usize,
}

/// Result of matching a route against a path
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route
    pub route: Route,
    /// Typed parameters extracted from the path
    pub params: HashMap<String, SegmentValue>,
}

impl Route {
    /// Parses a pattern string into a route
    ///
    /// The pattern is normalized before parsing, so `/homePost/` and
    /// `/homePost` register as the same route. Rejects unknown
    /// converter names and unnamed parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::Route;
    ///
    /// let route = Route::parse("/results/{ticket:int}/{fare:float}").unwrap();
    /// assert_eq!(route.params, vec!["ticket", "fare"]);
    ///
    /// assert!(Route::parse("/users/{id:uuid}").is_err());
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let normalized = normalize_path(pattern).into_owned();
        let segments = parse_pattern(&normalized)?;

        let params: Vec<String> = segments
            .iter()
            .filter_map(|seg| match seg {
                PatternSegment::Param { name, .. } => Some(name.clone()),
                PatternSegment::Static(_) => None,
            })
            .collect();

        let depth = segments.len();
        let priority = calculate_priority(params.len(), depth);

        Ok(Route {
            pattern: normalized,
            segments,
            params,
            name: None,
            priority,
        })
    }

    /// Sets a name for this route (for reverse URL generation)
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::Route;
    ///
    /// let route = Route::parse("/").unwrap().with_name("home");
    /// assert_eq!(route.name, Some("home".to_string()));
    /// ```
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Matches this route against a path
    ///
    /// The path is normalized first. Every segment must match: static
    /// segments literally, dynamic segments through their converter.
    /// Returns the typed parameters on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::Route;
    ///
    /// let route = Route::parse("/results/{ticket:int}/{fare:float}").unwrap();
    ///
    /// let params = route.matches("/results/5/12.00").unwrap();
    /// assert_eq!(params.get("ticket").unwrap().as_int(), Some(5));
    ///
    /// // "abc" fails the float regex, so the route does not match
    /// assert!(route.matches("/results/5/abc").is_none());
    /// ```
    pub fn matches(&self, path: &str) -> Option<HashMap<String, SegmentValue>> {
        let normalized = normalize_path(path);
        let path_segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pattern_seg, path_seg) in self.segments.iter().zip(path_segments) {
            match pattern_seg {
                PatternSegment::Static(text) => {
                    if text != path_seg {
                        return None;
                    }
                }
                PatternSegment::Param { name, converter } => {
                    let value = converter.parse(path_seg)?;
                    params.insert(name.clone(), value);
                }
            }
        }
        Some(params)
    }

    /// Generates a URL for this route by substituting parameters
    ///
    /// Each parameter goes back through its converter, so a `float`
    /// segment is rendered with exactly two decimals. Returns `None`
    /// when a required parameter is missing or its value kind does not
    /// fit the segment's converter.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::{Route, SegmentValue};
    /// use std::collections::HashMap;
    ///
    /// let route = Route::parse("/results/{ticket:int}/{fare:float}").unwrap();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("ticket".to_string(), SegmentValue::Int(5));
    /// params.insert("fare".to_string(), SegmentValue::Float(12.0));
    ///
    /// assert_eq!(route.generate_url(&params), Some("/results/5/12.00".to_string()));
    /// ```
    pub fn generate_url(&self, params: &HashMap<String, SegmentValue>) -> Option<String> {
        let rendered: Option<Vec<String>> = self
            .segments
            .iter()
            .map(|seg| match seg {
                PatternSegment::Static(text) => Some(text.clone()),
                PatternSegment::Param { name, converter } => {
                    params.get(name).and_then(|value| converter.to_url(value))
                }
            })
            .collect();

        rendered.map(|segs| {
            if segs.is_empty() {
                "/".to_string()
            } else {
                format!("/{}", segs.join("/"))
            }
        })
    }
}

/// Priority for route ordering: static routes first, then routes with
/// fewer dynamic segments, shallower patterns winning ties
fn calculate_priority(dynamic_count: usize, depth: usize) -> usize {
    if dynamic_count == 0 {
        0
    } else {
        dynamic_count * 10 + depth
    }
}

/// Main router that manages the route table and performs matching
///
/// Routes live in a `Vec` sorted by priority so matching walks them
/// in order and stops at the first hit. Named routes are additionally
/// indexed in a `HashMap` for O(1) reverse lookup.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    named_routes: HashMap<String, Route>,
}

impl Router {
    /// Creates an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route (functional builder)
    ///
    /// Routes are re-sorted by priority after addition.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::{Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::parse("/").unwrap().with_name("home"))
    ///     .with_route(Route::parse("/homePost").unwrap().with_name("home-post"));
    /// ```
    pub fn with_route(mut self, route: Route) -> Self {
        self.add_route(route);
        self
    }

    /// Adds a route to the table
    pub fn add_route(&mut self, route: Route) {
        if let Some(ref name) = route.name {
            self.named_routes.insert(name.clone(), route.clone());
        }
        self.routes.push(route);
        self.routes.sort_by_key(|r| r.priority);
    }

    /// Matches a path against all routes and returns the first match
    ///
    /// Routes are checked in priority order (static before dynamic).
    /// A path whose segment fails a converter regex simply yields no
    /// match for that route.
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::{Route, Router};
    ///
    /// let router = Router::new()
    ///     .with_route(Route::parse("/results/{ticket:int}/{fare:float}").unwrap());
    ///
    /// let m = router.match_route("/results/5/12.00").unwrap();
    /// assert_eq!(m.route.pattern, "/results/{ticket:int}/{fare:float}");
    ///
    /// assert!(router.match_route("/results/5/abc").is_none());
    /// ```
    pub fn match_route(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().find_map(|route| {
            route.matches(path).map(|params| RouteMatch {
                route: route.clone(),
                params,
            })
        })
    }

    /// Generates a URL from a named route and parameters
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::{Route, Router, SegmentValue};
    /// use std::collections::HashMap;
    ///
    /// let router = Router::new().with_route(
    ///     Route::parse("/results/{ticket:int}/{fare:float}")
    ///         .unwrap()
    ///         .with_name("results"),
    /// );
    ///
    /// let mut params = HashMap::new();
    /// params.insert("ticket".to_string(), SegmentValue::Int(5));
    /// params.insert("fare".to_string(), SegmentValue::Float(3.14159));
    ///
    /// let url = router.url_for("results", &params).unwrap();
    /// assert_eq!(url, "/results/5/3.14");
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, SegmentValue>) -> Option<String> {
        self.named_routes
            .get(name)
            .and_then(|route| route.generate_url(params))
    }

    /// Convenience method for generating URLs from parameter tuples
    ///
    /// # Examples
    ///
    /// ```
    /// use farecast_router::{Route, Router, SegmentValue};
    ///
    /// let router = Router::new().with_route(
    ///     Route::parse("/results/{ticket:int}/{fare:float}")
    ///         .unwrap()
    ///         .with_name("results"),
    /// );
    ///
    /// let url = router
    ///     .url_for_params("results", [
    ///         ("ticket", SegmentValue::Int(5)),
    ///         ("fare", SegmentValue::Float(12.0)),
    ///     ])
    ///     .unwrap();
    /// assert_eq!(url, "/results/5/12.00");
    /// ```
    pub fn url_for_params<I>(&self, name: &str, params: I) -> Option<String>
    where
        I: IntoIterator<Item = (&'static str, SegmentValue)>,
    {
        let param_map: HashMap<String, SegmentValue> = params
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        self.url_for(name, &param_map)
    }

    /// Gets a route by its name (O(1) lookup)
    pub fn get_route_by_name(&self, name: &str) -> Option<&Route> {
        self.named_routes.get(name)
    }

    /// Returns all registered routes in priority order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
