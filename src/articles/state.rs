use std::collections::BTreeMap;

use crate::store::{Action, AppState};

use super::models::Article;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleState {
    by_id: BTreeMap<i64, Article>,
}

pub fn reducer(mut state: ArticleState, action: &Action) -> ArticleState {
    match action {
        Action::ArticlesLoaded(articles) => {
            for article in articles {
                state.by_id.insert(article.id, article.clone());
            }
            state
        }
        _ => state,
    }
}

pub fn get_article(state: &AppState, id: i64) -> Option<&Article> {
    state.article.by_id.get(&id)
}

pub fn get_active_articles(state: &AppState) -> Vec<&Article> {
    state.article.by_id.values().filter(|article| article.active).collect()
}

pub fn find_article_by_barcode<'a>(state: &'a AppState, barcode: &str) -> Option<&'a Article> {
    state.article.by_id.values()
        .find(|article| article.barcode.as_deref() == Some(barcode))
}
