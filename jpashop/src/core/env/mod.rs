pub mod app_env;
