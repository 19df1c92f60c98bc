pub mod configure;
pub mod generate;
