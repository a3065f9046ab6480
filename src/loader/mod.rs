//! Loader module containing everything a single progress bar needs.
//!
//! # Overview
//!
//! - [`config`] - Validated animation parameters
//! - [`delay`] - Random and scripted frame delays
//! - [`frame`] - The text of one frame
//! - [`summary`] - What a loader reports when it exits
//! - [`worker`] - A cancellable loader task drawing on its own row
//! - [`single`] - The sequential single-bar variant
//!
//! # Examples
//!
//! ## Rendering Frames
//!
//! ```rust
//! use loaders::loader::Frame;
//!
//! let frame = Frame::new(1, 2, 4, 80);
//! assert_eq!(frame.to_string(), "Loader 1: [==>  ] 80ms");
//! ```
//!
//! ## Checking a Loader's Outcome
//!
//! ```rust
//! use loaders::loader::{Status, Summary};
//!
//! let summary = Summary::new(1, 50).with_status(Status::Cancelled);
//! match summary.status() {
//!     Status::Completed => println!("Loader {} finished", summary.line()),
//!     Status::Cancelled => println!("Loader {} stopped at {}", summary.line(), summary.progress()),
//! }
//! ```

pub mod config;
pub mod delay;
pub mod frame;
pub mod single;
pub mod summary;
pub mod worker;

pub use config::{AnimationConfig, DEFAULT_WIDTH, DEFAULT_WORKERS};
pub use delay::{DelaySource, RandomDelay, ScriptedDelay, DEFAULT_MAX_DELAY};
pub use frame::{Frame, COMPLETION_MARK};
pub use single::SingleLoader;
pub use summary::{Status, Summary};
pub use worker::{ProgressWorker, WorkerState};
