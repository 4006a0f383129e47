use shared::AppConfig;

/// Defaults plus whatever was baked in at build time.
///
/// `BANKDASH_API_URL` and `BANKDASH_LOG_LEVEL` are read when the wasm
/// bundle is compiled, since the browser has no process environment.
pub fn load() -> AppConfig {
    AppConfig::from_pairs([
        ("api_base_url", option_env!("BANKDASH_API_URL")),
        ("log_level", option_env!("BANKDASH_LOG_LEVEL")),
    ])
}
