pub(crate) mod atoms;
pub(crate) mod daisy;
pub(crate) mod shell;
pub(crate) mod toast;
pub(crate) mod view_setting;
