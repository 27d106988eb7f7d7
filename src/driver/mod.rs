pub(crate) mod effect_driver;
