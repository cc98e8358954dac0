/*! Integration tests for loadplan.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - store: Tests for ShelfStore mutations, validation, and the capacity ceiling
 * - layout: Tests for display ordering and split-view groupings through the façade
 * - category: Tests for the category label map, edit sessions, and label storage
 * - persist: Tests for the debounced save engine and the change-hook wiring
 * - plan: Tests for the LoadPlan façade, selection, and view snapshots
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("loadplan=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod layout;
mod store;
