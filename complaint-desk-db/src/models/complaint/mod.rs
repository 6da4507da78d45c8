pub mod category;
pub mod complaint;
pub mod complaint_id;
pub mod fields;
pub mod status;
pub mod update;

pub use category::ComplaintCategory;
pub use complaint::{AppliedChangeSet, ChangeSet, ComplaintModel, ComplaintPatch};
pub use complaint_id::ComplaintId;
pub use fields::{ComplaintFields, NewComplaint};
pub use status::{ComplaintStatus, InvalidStatusError, StatusCounts, Transition};
pub use update::{NewUpdate, UpdateModel};
