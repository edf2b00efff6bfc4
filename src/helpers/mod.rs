pub mod config_helper;
pub mod image_decoder;
