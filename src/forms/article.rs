use crate::articles::{models::{AddArticleParams, Article}, ArticleService};

use super::error::*;

#[derive(Debug, Clone)]
pub struct ArticleForm {
    pub name: String,
    pub barcode: String,
    pub amount: i64,
    pub active: bool,
}

impl Default for ArticleForm {
    fn default() -> Self {
        ArticleForm { name: String::new(), barcode: String::new(), amount: 0, active: true }
    }
}

impl ArticleForm {
    pub fn validate(&self) -> Result<AddArticleParams> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.barcode.trim().is_empty() {
            return Err(Error::MissingField("barcode"));
        }

        Ok(AddArticleParams {
            name: self.name.trim().to_string(),
            barcode: self.barcode.trim().to_string(),
            amount: self.amount,
            active: self.active,
            precursor: None,
        })
    }

    /// Adds the article. Callers navigate back afterwards whether or not it succeeded.
    pub async fn submit(&self, article_svc: &(dyn ArticleService + Send + Sync)) -> Result<Option<Article>> {
        let params = self.validate()?;
        Ok(article_svc.add_article(params).await)
    }
}
