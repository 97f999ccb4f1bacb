// File: src/handlers.rs
// Purpose: Route table and page handlers for the fare lookup flow

use crate::context::RequestContext;
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use farecast_router::{Converter, Route, Router, SegmentValue};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::info;

pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;
pub type HandlerFn = Arc<dyn Fn(RequestContext) -> HandlerFuture + Send + Sync>;

/// Parameterized results route: integer ticket id, integer gender
/// code, integer age, float fare (two decimals when reversed)
pub const RESULTS_PATTERN: &str = "/results/{ticket:int}/{gender:int}/{age:int}/{fare:float}";

/// Builds the application route table and its handler map
///
/// Handlers are keyed by the route's normalized pattern, which is what
/// the dispatcher gets back from a successful match.
pub fn build_routes() -> anyhow::Result<(Arc<Router>, HashMap<String, HandlerFn>)> {
    let router = Arc::new(
        Router::new()
            .with_route(Route::parse("/")?.with_name("home"))
            .with_route(Route::parse("/homePost/")?.with_name("home-post"))
            .with_route(Route::parse(RESULTS_PATTERN)?.with_name("results")),
    );

    let mut handlers: HashMap<String, HandlerFn> = HashMap::new();

    handlers.insert("/".to_string(), Arc::new(|ctx| Box::pin(home(ctx))));

    let post_router = router.clone();
    handlers.insert(
        "/homePost".to_string(),
        Arc::new(move |ctx| {
            let router = post_router.clone();
            Box::pin(home_post(ctx, router))
        }),
    );

    handlers.insert(
        RESULTS_PATTERN.to_string(),
        Arc::new(|ctx| Box::pin(results(ctx))),
    );

    Ok((router, handlers))
}

/// `GET /` — fare lookup form
async fn home(_ctx: RequestContext) -> Response {
    let markup = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Farecast" }
            }
            body {
                h1 { "Fare lookup" }
                form method="post" action="/homePost/" {
                    p {
                        label for="ticket" { "Ticket id" }
                        input type="text" id="ticket" name="ticket" required;
                    }
                    p {
                        label for="gender" { "Gender code" }
                        input type="text" id="gender" name="gender" required;
                    }
                    p {
                        label for="age" { "Age" }
                        input type="text" id="age" name="age" required;
                    }
                    p {
                        label for="fare" { "Fare" }
                        input type="text" id="fare" name="fare" required;
                    }
                    button type="submit" { "Look up" }
                }
            }
        }
    };
    Html(markup.into_string()).into_response()
}

/// `POST /homePost/` — validates the form and redirects to the
/// canonical results URL
///
/// Each field goes through the same converter that gates the results
/// route, so a fare that would 404 on the results page is rejected
/// here with a 422 instead of producing a dead redirect.
async fn home_post(ctx: RequestContext, router: Arc<Router>) -> Response {
    if ctx.method != Method::POST {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
            "Submit the fare form with POST",
        );
    }

    fn field(
        ctx: &RequestContext,
        invalid: &mut Vec<&'static str>,
        name: &'static str,
        converter: Converter,
    ) -> Option<SegmentValue> {
        match ctx.form.get(name).and_then(|raw| converter.parse(raw)) {
            Some(value) => Some(value),
            None => {
                invalid.push(name);
                None
            }
        }
    }

    let mut invalid: Vec<&'static str> = Vec::new();
    let ticket = field(&ctx, &mut invalid, "ticket", Converter::Int);
    let gender = field(&ctx, &mut invalid, "gender", Converter::Int);
    let age = field(&ctx, &mut invalid, "age", Converter::Int);
    let fare = field(&ctx, &mut invalid, "fare", Converter::Float);

    if !invalid.is_empty() {
        info!(fields = ?invalid, "rejected fare form");
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Invalid form",
            &format!("Invalid or missing fields: {}", invalid.join(", ")),
        );
    }

    // All four are Some once invalid is empty
    let url = router.url_for_params(
        "results",
        [
            ("ticket", ticket.unwrap()),
            ("gender", gender.unwrap()),
            ("age", age.unwrap()),
            ("fare", fare.unwrap()),
        ],
    );

    match url {
        Some(url) => {
            info!(%url, "fare form accepted");
            Redirect::to(&url).into_response()
        }
        None => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Could not build results URL",
        ),
    }
}

/// `GET /results/{ticket:int}/{gender:int}/{age:int}/{fare:float}` —
/// renders the typed route parameters back to the user
async fn results(ctx: RequestContext) -> Response {
    let ticket = ctx.params.get("ticket").and_then(|v| v.as_int());
    let gender = ctx.params.get("gender").and_then(|v| v.as_int());
    let age = ctx.params.get("age").and_then(|v| v.as_int());
    let fare = ctx.params.get("fare").and_then(|v| v.as_float());

    let (Some(ticket), Some(gender), Some(age), Some(fare)) = (ticket, gender, age, fare) else {
        // Unreachable when dispatched through the router; kept for
        // direct handler invocation
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Results handler invoked without route parameters",
        );
    };

    let markup = maud::html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Farecast results" }
            }
            body {
                h1 { "Results" }
                dl {
                    dt { "Ticket" }
                    dd { (ticket) }
                    dt { "Gender code" }
                    dd { (gender) }
                    dt { "Age" }
                    dd { (age) }
                    dt { "Fare" }
                    dd { (format!("{:.2}", fare)) }
                }
                a href="/" { "New lookup" }
            }
        }
    };
    Html(markup.into_string()).into_response()
}

/// Plain HTML error page
pub fn error_response(status: StatusCode, title: &str, message: &str) -> Response {
    let markup = maud::html! {
        (maud::DOCTYPE)
        html {
            head { title { (title) } }
            body {
                h1 { (status.as_u16()) " " (title) }
                p { (message) }
                a href="/" { "Go Home" }
            }
        }
    };
    (status, Html(markup.into_string())).into_response()
}
