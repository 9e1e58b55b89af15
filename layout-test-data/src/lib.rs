//! Hand-built table data shared by the layout crate tests.
//!
//! Every fixture is a big-endian byte array with the field layout spelled
//! out line by line, so a failing assertion can be traced back to the
//! exact byte.

pub mod base;
pub mod bitmap;
pub mod gdef;
pub mod gpos;
pub mod gsub;
pub mod jstf;
pub mod layout;
pub mod svg;
