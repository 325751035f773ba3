//! Process-wide router
//!
//! Libraries should take a `&LevelRouter`; applications that prefer a single
//! ambient instance can use [`router()`] instead. It is created on first use
//! with console destinations and may be configured once like any other router.

use super::router::LevelRouter;
use once_cell::sync::Lazy;

static GLOBAL_ROUTER: Lazy<LevelRouter> = Lazy::new(LevelRouter::new);

/// The process-wide router
///
/// # Example
///
/// ```no_run
/// use rust_level_router::global;
///
/// global::router().configure_by_level(3, true, true);
/// global::router().log("service ready");
/// ```
pub fn router() -> &'static LevelRouter {
    &GLOBAL_ROUTER
}
