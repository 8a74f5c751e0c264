use std::cell::Cell;
use std::sync::Arc;

use crate::context::RequestContext;
use crate::handler::{Handler, HandlerResult, Middleware};
use crate::request::Request;
use crate::response::Response;

/// A plain request-in/response-out service, the convention generic wrappers
/// are written against.
pub type RawService<'a> = Box<dyn FnMut(Request) -> Response + 'a>;

/// Bridges a function that wraps one [`RawService`] in another into a
/// context-based [`Middleware`].
///
/// The wrapper is driven through its native entry point with the context's
/// request. A synthetic terminal service stores whatever request reaches it
/// back onto the context (the wrapper may have replaced it), invokes the
/// chain's next handler, captures its result, and hands the context's
/// response back to the wrapper. Whatever response the wrapper ultimately
/// returns is stored on the context.
///
/// A wrapper that short-circuits without calling the service it wraps is
/// reported as success: it answered the request itself, and `next` is simply
/// never invoked. No error is synthesized here; the only error returned is
/// the one `next` produced.
pub fn wrap<W>(wrapper: W) -> Middleware
where
    W: for<'a> Fn(RawService<'a>) -> RawService<'a> + Send + Sync + 'static,
{
    let wrapper = Arc::new(wrapper);
    Box::new(move |next: Handler| {
        let wrapper = Arc::clone(&wrapper);
        let handler: Handler = Arc::new(move |ctx: &mut RequestContext| -> HandlerResult {
            let outcome: Cell<Option<HandlerResult>> = Cell::new(None);
            let request = ctx.take_request();

            let response = {
                let outcome = &outcome;
                let next = Arc::clone(&next);
                let ctx = &mut *ctx;
                let terminal: RawService<'_> = Box::new(move |request: Request| {
                    ctx.set_request(request);
                    outcome.set(Some(next(ctx)));
                    ctx.take_response()
                });

                let mut service = wrapper(terminal);
                service(request)
            };

            ctx.set_response(response);
            outcome.take().unwrap_or(Ok(()))
        });
        handler
    })
}

#[cfg(test)]
#[path = "wrap_test.rs"]
mod wrap_test;
