pub(crate) mod backend;
pub(crate) mod drawable;
pub(crate) mod scene;
pub(crate) mod svg;
pub(crate) mod theme;
