//! Records exchanged with the student data service, and the grade classifier.

pub mod domain;
pub mod error;
pub mod grade;

pub use domain::{
    Class, ClassId, Grade, RecordId, SearchName, Semester, SemesterId, Student, StudentId,
};
pub use error::{EmptyName, ServiceErrorBody};
pub use grade::Tier;
