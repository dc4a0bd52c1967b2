pub(crate) mod git;
pub(crate) mod preview;
