use std::fmt::Debug;

use conduit_di::Build;
use conduit_shared_contracts::id::IdService;
use conduit_utils::trace_instrument;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn generate<I: From<Uuid> + Debug + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }
}
