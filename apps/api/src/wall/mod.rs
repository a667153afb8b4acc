// Sizing API: thin translation between JSON requests and the wall-sizing core.
// The search is CPU-bound, so it runs inside tokio::task::spawn_blocking.

pub mod handlers;
