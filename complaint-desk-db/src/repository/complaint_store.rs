use crate::models::complaint::ComplaintModel;
use crate::repository::{
    AppendUpdate, ApplyChangeSet, CountByStatus, CreateComplaint, FindById, ImportBatch,
    ListComplaints, UpdateComplaint,
};

/// Every repository capability the ticket workflow needs from a backend
///
/// Implemented automatically for any type providing all of them.
pub trait ComplaintStore:
    CreateComplaint
    + FindById<ComplaintModel>
    + ListComplaints
    + CountByStatus
    + UpdateComplaint
    + AppendUpdate
    + ApplyChangeSet
    + ImportBatch<ComplaintModel>
{
}

impl<T> ComplaintStore for T where
    T: CreateComplaint
        + FindById<ComplaintModel>
        + ListComplaints
        + CountByStatus
        + UpdateComplaint
        + AppendUpdate
        + ApplyChangeSet
        + ImportBatch<ComplaintModel>
{
}
