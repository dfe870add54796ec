//! W3C trace context extraction from HTTP headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// The remote parent, if the headers carry a valid span context.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let extractor = Headers(headers);

    global::get_text_map_propagator(|propagator| {
        // Start from an empty context so requests without headers get a fresh trace.
        let context = propagator.extract_with_context(&Context::new(), &extractor);
        let is_valid = context.span().span_context().is_valid();

        is_valid.then_some(context)
    })
}

#[derive(Debug)]
struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}
