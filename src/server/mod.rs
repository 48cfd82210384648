//! TCP accept loop and connection dispatch.

pub mod listener;
