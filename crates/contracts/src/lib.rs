//! Types and rules shared by the contact form UI: form record, option
//! tables, CMS wire format, submission state machine and configuration.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
