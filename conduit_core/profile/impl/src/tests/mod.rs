use conduit_persistence_contracts::{
    follow::MockFollowRepository, user::MockUserRepository, MockDatabase, MockTransaction,
};

use crate::ProfileFeatureServiceImpl;

mod get_profile;

type Sut = ProfileFeatureServiceImpl<
    MockDatabase,
    MockUserRepository<MockTransaction>,
    MockFollowRepository<MockTransaction>,
>;
