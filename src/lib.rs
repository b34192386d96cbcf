pub mod config;
pub use crate::config::*;

pub mod core;
pub use crate::core::*;

pub mod error;
pub use crate::error::*;

pub mod mapper;
pub use crate::mapper::*;

pub mod pipeline;
pub use crate::pipeline::*;

pub mod reader;
pub use crate::reader::*;

pub mod transaction;
pub use crate::transaction::*;

pub mod writer;
pub use crate::writer::*;
