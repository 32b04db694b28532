/// Returns early from a test that talks to the real world clock API unless
/// `YEARNOW_LIVE_TESTS` is set. Never runs in CI.
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var("CI").is_ok() || std::env::var("YEARNOW_LIVE_TESTS").is_err() {
            println!(
                "Skipping {} (set YEARNOW_LIVE_TESTS to run against the live API)",
                module_path!()
            );
            return;
        }
    };
}
