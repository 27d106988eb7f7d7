pub(crate) mod builder;
pub(crate) mod tables;
pub(crate) mod topology;
