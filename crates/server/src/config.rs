use std::{collections::HashMap, fs};

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub pricing_path: String,
    pub public_pricing_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            pricing_path: "./data/pricing.json".into(),
            public_pricing_path: "./public/pricing.json".into(),
        }
    }
}

/// Layered settings: hard defaults, then `server.toml`, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("pricing_path") {
                settings.pricing_path = v.clone();
            }
            if let Some(v) = file_cfg.get("public_pricing_path") {
                settings.public_pricing_path = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("PRICING_PATH") {
        settings.pricing_path = v;
    }
    if let Ok(v) = std::env::var("APP__PRICING_PATH") {
        settings.pricing_path = v;
    }

    if let Ok(v) = std::env::var("PUBLIC_PRICING_PATH") {
        settings.public_pricing_path = v;
    }
    if let Ok(v) = std::env::var("APP__PUBLIC_PRICING_PATH") {
        settings.public_pricing_path = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_paths() {
        let settings = Settings::default();
        assert_eq!(settings.server_bind, "127.0.0.1:8080");
        assert_eq!(settings.pricing_path, "./data/pricing.json");
        assert_eq!(settings.public_pricing_path, "./public/pricing.json");
    }

    #[test]
    fn file_config_parses_flat_string_keys() {
        let raw = "bind_addr = \"0.0.0.0:9090\"\npricing_path = \"/tmp/pricing.json\"\n";
        let file_cfg: HashMap<String, String> = toml::from_str(raw).expect("toml");
        assert_eq!(file_cfg["bind_addr"], "0.0.0.0:9090");
        assert_eq!(file_cfg["pricing_path"], "/tmp/pricing.json");
    }
}
