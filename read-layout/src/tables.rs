//! The OpenType layout tables.

pub mod base;
pub mod bitmap;
pub mod cblc;
pub mod cbdt;
pub mod eblc;
pub mod ebdt;
pub mod gdef;
pub mod gpos;
pub mod gsub;
pub mod jstf;
pub mod layout;
pub mod math;
pub mod svg;
