pub(crate) mod breath;
pub(crate) mod effect;
pub(crate) mod rainbow;
pub(crate) mod rings;
pub(crate) mod spiral;
pub(crate) mod wipe;

#[cfg(test)]
#[path = "../../tests/unit/effects/effects.rs"]
mod tests;
