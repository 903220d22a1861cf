pub mod validation_utils;
