use std::fs;
use std::path::Path;

use shoppingbot_core::config::{
    active_env_key, resolve_config_path, AppConfig, ConfigOverrides,
    CONFIRMATION_FIELD_ENV_KEYS, LOG_FORMAT_ENV_KEYS, LOG_LEVEL_ENV_KEYS,
};
use toml::Value;

pub fn run(config: &AppConfig, overrides: &ConfigOverrides) -> String {
    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let entries = [
        (
            "request.confirmation_field",
            format!("{:?}", config.request.confirmation_field),
            CONFIRMATION_FIELD_ENV_KEYS,
            overrides.confirmation_field.map(|_| "--confirmation-field"),
        ),
        (
            "logging.level",
            config.logging.level.clone(),
            LOG_LEVEL_ENV_KEYS,
            overrides.log_level.as_ref().map(|_| "--log-level"),
        ),
        (
            "logging.format",
            format!("{:?}", config.logging.format),
            LOG_FORMAT_ENV_KEYS,
            overrides.log_format.map(|_| "log format override"),
        ),
    ];

    let mut lines = vec![
        "effective config (source precedence: override > env > file > default):".to_string(),
    ];
    for (key_path, value, env_keys, override_flag) in entries {
        let source = match override_flag {
            Some(flag) => format!("override ({flag})"),
            None => field_source(
                key_path,
                active_env_key(env_keys),
                config_file_doc.as_ref(),
                config_file_path.as_deref(),
            ),
        };
        lines.push(render_line(key_path, &value, source));
    }

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_key: Option<&str>,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_key {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
