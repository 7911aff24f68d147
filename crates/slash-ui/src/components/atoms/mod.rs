pub(crate) mod icons;
