pub(crate) mod mapping;
