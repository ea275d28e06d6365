// Aggregator for power-management integration tests located in
// `tests/power/`.

#[path = "power/sequencer_test.rs"]
mod sequencer_test;

#[path = "power/runtime_test.rs"]
mod runtime_test;
