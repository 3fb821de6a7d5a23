//! Resolve Module
//!
//! Turns a resolved dependency tree into a module graph plus attribution
//! texts, or fails as a whole.
//!
//! ## Structure
//!
//! - `options` - Run-wide settings (`ResolveOptions`)
//! - `result` - Result types (`Resolution`, `Attribution`)
//! - `use_case` - Orchestration (`ResolveUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use bpgen::application::resolve::{ResolveOptions, ResolveUseCase};
//!
//! let use_case = ResolveUseCase::new(ResolveOptions::new());
//! let resolution = use_case.execute(&tree, &sink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::ResolveOptions;
pub use result::{Attribution, Resolution};
pub use use_case::ResolveUseCase;
