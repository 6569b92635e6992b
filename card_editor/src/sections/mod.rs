//! Dynamic Section Manager - repeatable groups inside a form.
//!
//! A section is an ordered list of groups (one per trait, relationship,
//! landmark or faction). Groups are identified by:
//! - **GroupId**: a generated id, stable while the group lives in memory
//! - **index**: the on-screen position, which shifts on insert/remove/move
//!
//! Neither survives a save/load cycle; on disk a group is known only by its
//! name.

mod group;
mod list;

pub use group::*;
pub use list::*;
