use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

///
/// Which custom amounts the UI offers, and the balance range transactions must keep a user in.
///
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentConfig {
    #[serde(default)]
    pub deposit: DirectionConfig,
    #[serde(default)]
    pub dispense: DirectionConfig,
    #[serde(default)]
    pub boundary: Boundary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionConfig {
    #[serde(default = "enabled")]
    pub custom: bool,
}

impl Default for DirectionConfig {
    fn default() -> Self {
        DirectionConfig { custom: true }
    }
}

fn enabled() -> bool {
    true
}

/// Balance limits in cents. `None` leaves that side open.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Boundary {
    pub upper: Option<i64>,
    pub lower: Option<i64>,
}

impl Boundary {
    pub fn contains(&self, balance: i64) -> bool {
        self.upper.map_or(true, |upper| balance <= upper)
            && self.lower.map_or(true, |lower| balance >= lower)
    }
}
