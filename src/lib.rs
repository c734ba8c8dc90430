//! Automatic fill-in-the-blank multiple-choice question generation.
//!
//! ```no_run
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let questions = mcq_gen::quiz::generate(
//!     "The quick brown fox jumps over the lazy dog. Dogs are loyal animals.",
//!     2,
//!     &mut rng,
//! );
//! for question in &questions {
//!     println!("{} {:?}", question.stem, question.options);
//! }
//! ```

pub mod config;
pub mod quiz;
