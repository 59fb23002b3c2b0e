//! Test helpers.

use std::{io, sync::Arc};

use salvo::{affix_state::inject, prelude::*};

use catalogue_app::{
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        tasks::{
            MockTasksService,
            records::{TaskId, TaskRecord, TaskStatus},
        },
    },
};

use crate::{state::State, uploads::UploadDir};

pub(crate) fn make_task(id: TaskId) -> TaskRecord {
    TaskRecord {
        id,
        title: "Study".to_string(),
        description: "Read the docs".to_string(),
        status: TaskStatus::Pending,
        version: 0,
    }
}

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        name: "Notebook".to_string(),
        description: "A5, dotted".to_string(),
        quantity: 12,
        price: 4.5,
        discount: None,
        discount_date: None,
        category: "stationery".to_string(),
        image_path: None,
        version: 0,
    }
}

/// A driver error standing in for an unreachable store.
pub(crate) fn store_unavailable() -> mongodb::error::Error {
    io::Error::new(io::ErrorKind::ConnectionRefused, "store unavailable").into()
}

fn state(
    tasks: MockTasksService,
    products: MockProductsService,
    uploads: UploadDir,
) -> Arc<State> {
    State::shared(
        AppContext {
            tasks: Arc::new(tasks),
            products: Arc::new(products),
        },
        uploads,
    )
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn tasks_service(tasks: MockTasksService, route: Router) -> Service {
    service(
        state(tasks, MockProductsService::new(), UploadDir::new("uploads")),
        route,
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    products_service_with_uploads(products, UploadDir::new("uploads"), route)
}

pub(crate) fn products_service_with_uploads(
    products: MockProductsService,
    uploads: UploadDir,
    route: Router,
) -> Service {
    service(state(MockTasksService::new(), products, uploads), route)
}
