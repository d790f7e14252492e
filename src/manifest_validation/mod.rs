//! Manifest validation domain: the data model, the test-dependency policy
//! and the comparator that checks a submission against a reference.
pub mod domain;
pub mod policies;
pub mod services;
