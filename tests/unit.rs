//! Unit test harness for brake-bedding.
//!
//! This module organizes unit tests for each component of the library.

mod unit {
    mod classification;
    mod plan_parsing;
    mod plan_validation;
}
