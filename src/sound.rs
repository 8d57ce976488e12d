use std::sync::Arc;

use log::debug;

#[cfg(test)]
use mockall::automock;

use crate::transactions::models::CreateTransactionParams;

pub type DynSoundPlayer = Arc<dyn SoundPlayer + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashSound {
    Purchase,
    Transfer,
    Deposit,
    Dispense,
}

impl CashSound {
    pub fn for_params(params: &CreateTransactionParams) -> Self {
        if params.article_id.is_some() {
            CashSound::Purchase
        } else if params.recipient_id.is_some() {
            CashSound::Transfer
        } else if params.amount > 0 {
            CashSound::Deposit
        } else {
            CashSound::Dispense
        }
    }
}

///
/// Audio cue played right before a transaction is submitted.
///
#[cfg_attr(test, automock)]
pub trait SoundPlayer {
    fn play_cash_sound(&self, params: &CreateTransactionParams);
}

/// Player for headless setups: records the cue in the log instead of playing it.
pub struct LogSoundPlayer;

impl LogSoundPlayer {
    pub fn new_dyn() -> DynSoundPlayer {
        Arc::new(LogSoundPlayer)
    }
}

impl SoundPlayer for LogSoundPlayer {
    fn play_cash_sound(&self, params: &CreateTransactionParams) {
        debug!("Playing {:?} cue", CashSound::for_params(params));
    }
}
