//! # Attribute System
//!
//! Every remote resource is described by a constant [`ResourceSpec`]: its
//! attributes, how they map to the service's JSON keys, which of them are
//! read-only, and which related collections hang off it. The generic
//! [`Resource`](crate::resource::Resource) consults its `ResourceSpec` for every
//! read, write and deserialization, so the read-only guard and the field
//! mapping live in one place for all resource types.
//!
//! ## Attribute Kinds
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `username`, `bio` | Free text |
//! | `Bool` | `closed`, `unread` | Flag |
//! | `Integer` | `short_id` | Whole number |
//! | `Timestamp` | `date`, `due` | RFC 3339 instant |
//! | `List` | `member_ids` | List of strings |
//!
//! ## Registry
//!
//! Specs are registered once in a process-wide [`AttributeRegistry`],
//! reachable through [`registry()`], and never change afterwards.
//!
//! ```ignore
//! let reg = registry();
//! assert!(reg.is_read_only(ResourceKind::Member, "username")?);
//! assert_eq!(reg.all_names(ResourceKind::Member)?[0], "id");
//! ```

mod registry;
mod spec;
mod value;

pub(crate) use registry::undeclared;
pub use registry::{registry, AttributeRegistry};
pub use spec::{
    AttributeKind, AttributeSpec, RelationSpec, ResourceKind, ResourceSpec, UpdateParam,
};
pub use value::AttrValue;
