#[macro_export]
macro_rules! log_api_err {
    // Usage: log_api_err!("saving aff-notice", &err);
    ($context:expr, $err:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::log::error!("[{}] {} failed: {}", location, $context, $err);
    }};
    // Usage: log_api_err!("uploading", &err, field);
    ($context:expr, $err:expr, $detail:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::log::error!(
            "[{}] {} failed ({:?}): {}",
            location,
            $context,
            $detail,
            $err
        );
    }};
}
