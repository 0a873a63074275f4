use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};

lazy_static! {
    /// URL tool calls by operation and outcome
    pub static ref URL_OPERATIONS: IntCounterVec = register_int_counter_vec!(
        "seller_desk_url_operations_total",
        "URL tool operations by outcome",
        &["operation", "outcome"]
    )
    .expect("metric can be registered");
}

pub fn record(operation: &str, ok: bool) {
    let outcome = if ok { "ok" } else { "invalid" };
    URL_OPERATIONS.with_label_values(&[operation, outcome]).inc();
}
