pub mod use_is_open;
