use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::{
    api_client::{post_json, DynApiClient},
    error_handler::error_handler,
    store::{Action, Dispatch, DynStore},
};

use models::*;

pub mod models;
pub mod state;


pub type DynArticleService = Arc<dyn ArticleService + Send + Sync>;

pub const ARTICLES_LOADING_ERROR: &str = "ARTICLES_LOADING_ERROR";
pub const ARTICLE_CREATION_ERROR: &str = "ARTICLE_CREATION_ERROR";

#[async_trait]
pub trait ArticleService {
    async fn load_articles(&self) -> Option<Vec<Article>>;
    async fn add_article(&self, params: AddArticleParams) -> Option<Article>;
}

pub struct ApiArticleService {
    api: DynApiClient,
    store: DynStore,
}

impl ApiArticleService {
    pub fn new_dyn(api: DynApiClient, store: DynStore) -> DynArticleService {
        Arc::new(ApiArticleService { api, store })
    }
}

#[async_trait]
impl ArticleService for ApiArticleService {
    async fn load_articles(&self) -> Option<Vec<Article>> {
        let data = error_handler::<ArticlesResponse, _>(
            self.store.as_ref(),
            self.api.get("article"),
            ARTICLES_LOADING_ERROR,
        ).await?;

        self.store.dispatch(Action::ArticlesLoaded(data.articles.clone()));
        Some(data.articles)
    }

    async fn add_article(&self, params: AddArticleParams) -> Option<Article> {
        let data = error_handler::<ArticleResponse, _>(
            self.store.as_ref(),
            post_json(self.api.as_ref(), "article", &params),
            ARTICLE_CREATION_ERROR,
        ).await?;

        info!("Added article {} ({})", data.article.id, data.article.name);
        self.store.dispatch(Action::ArticlesLoaded(vec![data.article.clone()]));
        Some(data.article)
    }
}
