use std::{env, fs};

use log::info;
use reqwest::Client;
use tally_client::{
    api_client::ReqwestApiClient,
    articles::ApiArticleService,
    config::Config,
    sound::LogSoundPlayer,
    store::Store,
    transactions::{state::get_user_transactions, ApiTransactionService},
    users::{state::get_user, ApiUserService},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();

    let config_path = env::var("TALLY_CONFIG").unwrap_or(String::from("config.json"));
    let config = serde_json::from_str::<Config>(&fs::read_to_string(config_path)?)?;
    let user_id = env::var("TALLY_USER_ID")?.parse::<i64>()?;

    let store = Store::new_dyn();
    let api = ReqwestApiClient::new_dyn(Client::new(), &config.api.base_url);
    let user_svc = ApiUserService::new_dyn(api.clone(), store.clone());
    let article_svc = ApiArticleService::new_dyn(api.clone(), store.clone());
    let tx_svc = ApiTransactionService::new_dyn(api, store.clone(), LogSoundPlayer::new_dyn());

    user_svc.load_user(user_id).await;
    article_svc.load_articles().await;
    tx_svc.load_transactions(user_id, None).await;

    store.select(|state| {
        if let Some(user) = get_user(state, user_id) {
            info!("{} ({}): balance {}", user.name, user.id, user.balance);
        }
        for tx in get_user_transactions(state, user_id) {
            info!(
                "#{} {} {}{}",
                tx.id,
                tx.created.to_rfc3339(),
                tx.amount,
                if tx.is_deleted { " (deleted)" } else { "" },
            );
        }
        for alert in state.alerts.notifications() {
            log::error!("{}", alert.message_key);
        }
    });

    Ok(())
}
