pub mod app_config;
pub mod cart_config;
pub mod storage_config;
