//! State

use std::sync::Arc;

use catalogue_app::context::AppContext;

use crate::uploads::UploadDir;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) uploads: UploadDir,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, uploads: UploadDir) -> Self {
        Self { app, uploads }
    }

    #[must_use]
    pub(crate) fn shared(app: AppContext, uploads: UploadDir) -> Arc<Self> {
        Arc::new(Self::new(app, uploads))
    }
}
