use std::sync::Arc;

use crate::constants::method;
use crate::context::RequestContext;
use crate::handler::{Handler, Middleware};
use crate::options::MethodOverrideOptions;

/// Middleware that replaces a POST request's method with the value announced
/// through the configured override source, for clients (HTML forms, most
/// prominently) that can only transmit GET and POST.
///
/// Only `POST` can be overridden. Loosening that would let a crafted link
/// turn a plain GET into a DELETE via a query parameter.
pub struct MethodOverride {
    options: MethodOverrideOptions,
}

impl MethodOverride {
    pub fn new() -> Self {
        Self::with_options(MethodOverrideOptions::default())
    }

    /// Construction never fails; the options carry their own defaults.
    pub fn with_options(options: MethodOverrideOptions) -> Self {
        Self { options }
    }

    pub fn into_middleware(self) -> Middleware {
        let options = self.options;
        Box::new(move |next: Handler| {
            let options = options.clone();
            let handler: Handler = Arc::new(move |ctx: &mut RequestContext| {
                if options.skip.should_skip(ctx) {
                    return next(ctx);
                }

                if ctx.method() == method::POST
                    && let Some(overridden) = options.getter.resolve(ctx)
                {
                    ctx.set_method(overridden);
                }

                next(ctx)
            });
            handler
        })
    }
}

impl Default for MethodOverride {
    fn default() -> Self {
        Self::new()
    }
}

/// Method-override middleware with the default configuration.
pub fn method_override() -> Middleware {
    MethodOverride::new().into_middleware()
}

#[cfg(test)]
#[path = "method_override_test.rs"]
mod method_override_test;
