pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{gist::GistStorage, local::LocalStorage, lottery::LotteryClient};
pub use crate::app::run;
pub use crate::config::CliConfig;
pub use crate::core::{etl::EtlEngine, pipeline::QuinielaPipeline};
pub use crate::utils::error::{QuinielaError, Result};
