pub mod footer;
pub mod header;
pub mod widgets;

pub use footer::footer;
pub use header::header;
