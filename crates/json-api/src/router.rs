//! App Router

use salvo::Router;

use crate::{products, tasks};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("tasks")
                .get(tasks::index::handler)
                .post(tasks::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(tasks::get::handler)
                        .put(tasks::update::handler)
                        .delete(tasks::delete::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("search")
                        .get(products::search::handler)
                        .push(Router::with_path("{id}").get(products::get::handler)),
                )
                .push(
                    Router::with_path("{id}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
