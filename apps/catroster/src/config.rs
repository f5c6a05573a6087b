use std::{collections::HashMap, fs};

use serde::Deserialize;
use widget_core::{ApiEndpoint, RequestOptions, WidgetConfig};

#[derive(Debug)]
pub struct Settings {
    pub api_url: String,
    pub method: Option<String>,
    pub credentials: Option<String>,
    pub headers: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000/people.json".into(),
            method: None,
            credentials: None,
            headers: HashMap::new(),
        }
    }
}

impl Settings {
    pub fn widget_config(&self) -> WidgetConfig {
        WidgetConfig {
            api: ApiEndpoint {
                url: Some(self.api_url.clone()),
                options: RequestOptions {
                    method: self.method.clone(),
                    credentials: self.credentials.clone(),
                    headers: self.headers.clone(),
                },
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_url: Option<String>,
    method: Option<String>,
    credentials: Option<String>,
    #[serde(default)]
    headers: HashMap<String, String>,
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("catroster.toml") {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.api_url {
                settings.api_url = v;
            }
            if let Some(v) = file_cfg.method {
                settings.method = Some(v);
            }
            if let Some(v) = file_cfg.credentials {
                settings.credentials = Some(v);
            }
            settings.headers.extend(file_cfg.headers);
        }
    }

    if let Ok(v) = std::env::var("CATROSTER_API_URL") {
        settings.api_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_URL") {
        settings.api_url = v;
    }

    if let Ok(v) = std::env::var("CATROSTER_METHOD") {
        settings.method = Some(v);
    }
    if let Ok(v) = std::env::var("APP__METHOD") {
        settings.method = Some(v);
    }

    if let Ok(v) = std::env::var("CATROSTER_CREDENTIALS") {
        settings.credentials = Some(v);
    }

    settings
}
