//! Wizard state documents and reducers
//!
//! Each wizard's state is one serializable document driven by a pure
//! reducer: action in, new document out, no I/O. The async edges (the
//! actual key generation, the actual gateway verification call) happen
//! outside the reducer; their outcome re-enters as a `…Succeeded` or
//! `…Failed` action. Reducers are total - an action that is not legal
//! in the current step returns the document unchanged except for a
//! recorded validation message.

pub mod api_key;
pub mod payment;
