pub mod cell;
pub mod course;
pub mod date_mode;
pub mod marker;
pub mod record;
pub mod sheet_kind;
pub mod view_state;

pub use cell::CellValue;
pub use course::CourseRecord;
pub use date_mode::DateMode;
pub use marker::Marker;
pub use record::{DatedRecord, Record};
pub use sheet_kind::{DATE_COLUMN, SheetKind};
pub use view_state::ViewState;
