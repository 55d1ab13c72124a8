use querytail_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged separately because logging is configured from the loaded config.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        log_file = %config.tail.log_path.display(),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        follow_rotation = config.tail.follow_rotation,
        queue_capacity = config.hub.subscriber_queue_capacity,
        overflow_policy = config.hub.overflow_policy.as_str(),
        "Configuration loaded"
    );
}
