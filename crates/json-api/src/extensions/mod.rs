//! Extension traits

mod depot;
mod path_id;
mod payload;
mod result;
mod validation;

pub(crate) use depot::DepotExt as _;
pub(crate) use path_id::PathIdExt as _;
pub(crate) use payload::{Payload, read_payload};
pub(crate) use result::{GENERIC_ERROR_BRIEF, ResultExt as _};
pub(crate) use validation::ValidationExt as _;
