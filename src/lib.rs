//! `watermark-manager` puts a text or image watermark on a picture,
//! asking the user what to do one question at a time.
//!
//! The interface of this library is unstable and only meant for the `watermark-manager` binary.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod operations;
pub mod plan;
pub mod prompt;
pub mod session;
pub mod settings;
mod utils;
