mod view;

pub(crate) use view::{HomePage, NotFoundPage};
