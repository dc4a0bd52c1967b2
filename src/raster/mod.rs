pub(crate) mod backend;
pub(crate) mod bitmap;
pub(crate) mod grid;
pub(crate) mod outline;
