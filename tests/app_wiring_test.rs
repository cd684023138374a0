#[cfg(test)]
mod app_wiring {
    use std::sync::Arc;

    use crestline::config;
    use crestline::web::{router, AppState};

    #[test]
    fn router_assembles_with_test_config() {
        let config = Arc::new(config::create_test_config());
        let _app = router(AppState { config });
    }
}
