//! Candidate dates per meeting.
//!
//! A [`DomainStore`] owns one [`Domain`] per variable. Domains start out as
//! every day of a [`DateRange`] and are only ever narrowed by propagation.

mod domain;
mod error;
mod range;
mod store;

pub use domain::Domain;
pub use error::DomainError;
pub use range::DateRange;
pub use store::DomainStore;
