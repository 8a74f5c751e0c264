use std::sync::Arc;

use crate::context::RequestContext;

/// Type-erased error carried up the chain. This crate never produces one of
/// its own; handlers further down supply them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<(), BoxError>;

/// One step of the request-handling chain.
pub type Handler = Arc<dyn Fn(&mut RequestContext) -> HandlerResult + Send + Sync>;

/// A middleware takes the next handler in the chain and yields the wrapped one.
pub type Middleware = Box<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Lifts a closure into a [`Handler`].
pub fn handler_fn<F>(f: F) -> Handler
where
    F: Fn(&mut RequestContext) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}
