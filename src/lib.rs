pub mod constants;
mod context;
mod handler;
mod method_override;
mod options;
mod request;
mod response;
mod wrap;

pub use context::RequestContext;
pub use handler::{BoxError, Handler, HandlerResult, Middleware, handler_fn};
pub use method_override::{MethodOverride, method_override};
pub use options::{MethodGetter, MethodGetterFn, MethodOverrideOptions, Skip, SkipPredicateFn};
pub use request::Request;
pub use response::Response;
pub use wrap::{RawService, wrap};
