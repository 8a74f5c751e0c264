use std::sync::Arc;

use crate::constants::header;
use crate::context::RequestContext;

pub type SkipPredicateFn = dyn Fn(&RequestContext) -> bool + Send + Sync;
pub type MethodGetterFn = dyn Fn(&RequestContext) -> Option<String> + Send + Sync;

/// Decides per request whether the middleware should step aside entirely.
#[derive(Clone, Default)]
pub enum Skip {
    #[default]
    Never,
    Predicate(Arc<SkipPredicateFn>),
}

impl Skip {
    pub fn never() -> Self {
        Self::Never
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn should_skip(&self, ctx: &RequestContext) -> bool {
        match self {
            Skip::Never => false,
            Skip::Predicate(predicate) => predicate(ctx),
        }
    }
}

/// Strategy for extracting the candidate override method from a request.
#[derive(Clone)]
pub enum MethodGetter {
    Header(String),
    Form(String),
    Query(String),
    Custom(Arc<MethodGetterFn>),
}

impl Default for MethodGetter {
    fn default() -> Self {
        Self::Header(header::X_HTTP_METHOD_OVERRIDE.to_owned())
    }
}

impl MethodGetter {
    /// Reads the override method from the named request header.
    pub fn header<S: Into<String>>(name: S) -> Self {
        Self::Header(name.into())
    }

    /// Reads the override method from a field of the urlencoded request body.
    pub fn form<S: Into<String>>(param: S) -> Self {
        Self::Form(param.into())
    }

    /// Reads the override method from a query-string parameter.
    pub fn query<S: Into<String>>(param: S) -> Self {
        Self::Query(param.into())
    }

    pub fn custom<F>(getter: F) -> Self
    where
        F: Fn(&RequestContext) -> Option<String> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(getter))
    }

    /// Resolves the candidate method for this request. An empty candidate is
    /// treated as absent.
    pub fn resolve(&self, ctx: &RequestContext) -> Option<String> {
        let candidate = match self {
            MethodGetter::Header(name) => ctx.header(name).map(str::to_owned),
            MethodGetter::Form(param) => ctx.form_value(param).map(str::to_owned),
            MethodGetter::Query(param) => ctx.query_param(param).map(str::to_owned),
            MethodGetter::Custom(getter) => getter(ctx),
        };

        candidate.filter(|method| !method.is_empty())
    }
}

/// Configuration for the method-override middleware. Immutable once the
/// middleware is constructed; unset fields fall back to the documented
/// defaults (never skip, `X-HTTP-Method-Override` header getter).
#[derive(Clone, Default)]
pub struct MethodOverrideOptions {
    pub skip: Skip,
    pub getter: MethodGetter,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
