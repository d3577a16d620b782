use crate::notify::notify_service::NotifyService;
use crate::telegram::TelegramNotifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notify_service: NotifyService,
    pub notifier: TelegramNotifier,
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub telegram_bot_token: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8099".to_string())
                .parse()
                .expect("PORT must be a number"),
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .expect("TELEGRAM_BOT_TOKEN must be set"),
            static_dir: std::env::var("NOTIFIER_STATIC_DIR")
                .unwrap_or_else(|_| "./static".to_string()),
        }
    }
}
