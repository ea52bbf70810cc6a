use std::future::Future;

use conduit_models::{
    article::{ArticleComposite, ArticleView},
    user::UserId,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ArticleViewService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Annotates the articles with their favorite counts and the viewer's
    /// favorited and following state, preserving their order.
    ///
    /// All annotation data is fetched in batches keyed by the given
    /// articles. Anonymous viewers only get default annotations and cause no
    /// lookups at all.
    fn annotate(
        &self,
        txn: &mut Txn,
        viewer: Option<UserId>,
        composites: Vec<ArticleComposite>,
    ) -> impl Future<Output = anyhow::Result<Vec<ArticleView>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockArticleViewService<Txn> {
    pub fn with_annotate(
        mut self,
        viewer: Option<UserId>,
        composites: Vec<ArticleComposite>,
        result: Vec<ArticleView>,
    ) -> Self {
        self.expect_annotate()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(viewer),
                mockall::predicate::eq(composites),
            )
            .return_once(|_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
