pub(crate) mod menu_bar;
pub(crate) mod status_bar;
pub(crate) mod zoom_dialog;
