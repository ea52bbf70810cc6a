use conduit_core_comment_contracts::list::MockCommentListQueryService;
use conduit_persistence_contracts::{
    article::MockArticleRepository, comment::MockCommentRepository, user::MockUserRepository,
    MockDatabase, MockTransaction,
};
use conduit_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::CommentFeatureServiceImpl;

mod add_comment;

type Sut = CommentFeatureServiceImpl<
    MockDatabase,
    MockIdService,
    MockTimeService,
    MockCommentListQueryService<MockTransaction>,
    MockArticleRepository<MockTransaction>,
    MockCommentRepository<MockTransaction>,
    MockUserRepository<MockTransaction>,
>;
