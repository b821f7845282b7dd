use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("warmbridge.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("warmbridge.client.request_errors");

pub(crate) static BACKEND_REQUESTS: Counter = Counter::new("warmbridge.backend.requests");
pub(crate) static BACKEND_REQUEST_ERRORS: Counter =
    Counter::new("warmbridge.backend.request_errors");

pub(crate) static MOCK_REPLIES: Counter = Counter::new("warmbridge.mock.replies");

pub(crate) static SESSION_SUBMISSIONS: Counter = Counter::new("warmbridge.session.submissions");
pub(crate) static SESSION_FAILURES: Counter = Counter::new("warmbridge.session.failures");

pub(crate) static SERVER_REQUESTS: Counter = Counter::new("warmbridge.server.requests");
pub(crate) static SERVER_ERRORS: Counter = Counter::new("warmbridge.server.errors");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&BACKEND_REQUESTS);
    collector.register_counter(&BACKEND_REQUEST_ERRORS);

    collector.register_counter(&MOCK_REPLIES);

    collector.register_counter(&SESSION_SUBMISSIONS);
    collector.register_counter(&SESSION_FAILURES);

    collector.register_counter(&SERVER_REQUESTS);
    collector.register_counter(&SERVER_ERRORS);
}
