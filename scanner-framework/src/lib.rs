pub mod bins;
pub mod buffer;
pub mod context;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod streaming;
pub mod traits;

pub use bins::{Bins, Counter};
pub use buffer::BoundedBuffer;
pub use common_framework::{ByteSlice, Checkpoint, Position};
pub use context::{DefaultContext, ScanContext};
pub use cursor::Cursor;
pub use error::ScanError;
pub use scanner::{RuleSet, ScanSummary, Scanned, Scanner};
pub use streaming::{ReaderContext, CHUNK_SIZE};
pub use traits::{ByteRule, ClassifyRule, Tally};
