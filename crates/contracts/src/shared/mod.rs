pub mod envelope;
pub mod paging;
pub mod record_state;

pub use envelope::ApiResponse;
pub use paging::{PageQuery, PagedResult};
pub use record_state::RecordState;
