use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub barcode: Option<String>,
    /// Price in cents
    pub amount: i64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub precursor: Option<i64>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddArticleParams {
    pub name: String,
    pub barcode: String,
    pub amount: i64,
    pub active: bool,
    pub precursor: Option<i64>,
}
