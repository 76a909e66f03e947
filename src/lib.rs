//! Unicode character names backed by a run-length encoded dataset.
//!
//! ```
//! use unicode_names_rle::{NameIndex, Run, RunSequence};
//!
//! let runs = RunSequence::new(vec![
//!     Run::new(65, 1, "LATIN CAPITAL LETTER A"),
//!     Run::new(0, 1, "LATIN CAPITAL LETTER B"),
//! ]);
//! let mut names = NameIndex::new(runs, vec![vec![(0, "NULL")]]);
//!
//! assert_eq!(names.get_by_code_point(0x42), Some("LATIN CAPITAL LETTER B"));
//! assert_eq!(names.get_by_code_point(0), Some("NULL"));
//! assert_eq!(names.get_by_code_point(0x43), None);
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod names;
pub mod ranges;
pub mod runs;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};
pub use names::NameIndex;
pub use ranges::range_label;
pub use runs::{Name, Run, RunDecoder, RunSequence, Validation};
pub use source::load_index;
