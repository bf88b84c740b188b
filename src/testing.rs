/// Installs a logger for tests; safe to call more than once
pub(crate) fn init_test() {
    drop(env_logger::try_init());
}
