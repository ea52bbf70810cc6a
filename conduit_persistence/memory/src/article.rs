use chrono::{DateTime, Utc};
use conduit_di::Build;
use conduit_models::{
    article::{Article, ArticleComposite, ArticleFilter, ArticleSlug},
    pagination::{CursorPageRequest, PageRequest},
};
use conduit_persistence_contracts::article::{ArticleRepoError, ArticleRepository};
use conduit_utils::trace_instrument;

use crate::{select_page, to_usize, MemoryStore, MemoryTransaction};

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryArticleRepository;

impl ArticleRepository<MemoryTransaction> for MemoryArticleRepository {
    #[trace_instrument(skip(self, txn))]
    async fn list_composites(
        &self,
        txn: &mut MemoryTransaction,
        filter: &ArticleFilter,
        request: &CursorPageRequest<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<ArticleComposite>> {
        let store = txn.store();
        select_page(
            store.articles.values().filter(|a| store.matches(filter, a)),
            |a| (a.created_at, a.id),
            request,
        )
        .into_iter()
        .map(|a| store.article_composite(a))
        .collect()
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_composites_by_offset(
        &self,
        txn: &mut MemoryTransaction,
        filter: &ArticleFilter,
        pagination: PageRequest,
    ) -> anyhow::Result<Vec<ArticleComposite>> {
        let store = txn.store();
        let mut articles = store
            .articles
            .values()
            .filter(|a| store.matches(filter, a))
            .collect::<Vec<_>>();
        articles.sort_by_key(|a| std::cmp::Reverse((a.created_at, a.id)));

        articles
            .into_iter()
            .skip(to_usize(pagination.offset()))
            .take(to_usize(pagination.limit()))
            .map(|a| store.article_composite(a))
            .collect()
    }

    #[trace_instrument(skip(self, txn))]
    async fn count(
        &self,
        txn: &mut MemoryTransaction,
        filter: &ArticleFilter,
    ) -> anyhow::Result<u64> {
        let store = txn.store();
        let count = store
            .articles
            .values()
            .filter(|a| store.matches(filter, a))
            .count();
        Ok(count.try_into()?)
    }

    #[trace_instrument(skip(self, txn))]
    async fn get_composite_by_slug(
        &self,
        txn: &mut MemoryTransaction,
        slug: &ArticleSlug,
    ) -> anyhow::Result<Option<ArticleComposite>> {
        let store = txn.store();
        store
            .articles
            .values()
            .find(|a| a.slug == *slug)
            .map(|a| store.article_composite(a))
            .transpose()
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut MemoryTransaction,
        article: &Article,
    ) -> Result<(), ArticleRepoError> {
        let store = txn.store_mut();
        if store.articles.values().any(|a| a.slug == article.slug) {
            return Err(ArticleRepoError::SlugConflict);
        }
        store.user(article.author_id)?;
        store.articles.insert(article.id, article.clone());
        Ok(())
    }
}

impl MemoryStore {
    fn matches(&self, filter: &ArticleFilter, article: &Article) -> bool {
        let ArticleFilter {
            tag,
            author,
            favorited_by,
            author_ids,
        } = filter;

        let tag_matches = tag.as_ref().map_or(true, |tag| article.tags.contains(tag));
        let author_matches = author.as_ref().map_or(true, |name| {
            self.users
                .get(&article.author_id)
                .is_some_and(|author| author.name.eq_ignore_ascii_case(name.as_str()))
        });
        let favorited_matches = favorited_by.as_ref().map_or(true, |name| {
            self.users
                .values()
                .find(|user| user.name.eq_ignore_ascii_case(name.as_str()))
                .is_some_and(|user| self.favorites.contains(&(user.id, article.id)))
        });
        let author_ids_matches = author_ids
            .as_ref()
            .map_or(true, |ids| ids.contains(&article.author_id));

        tag_matches && author_matches && favorited_matches && author_ids_matches
    }

    fn article_composite(&self, article: &Article) -> anyhow::Result<ArticleComposite> {
        Ok(ArticleComposite {
            article: article.clone(),
            author: self.user(article.author_id)?.clone(),
        })
    }
}
