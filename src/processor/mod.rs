pub mod base;
pub mod block_scanner;
pub mod scan_range;

pub use base::*;
pub use block_scanner::BlockScanner;
pub use scan_range::ScanRange;
