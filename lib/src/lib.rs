//! Runtime plumbing shared by the tinycanvas crates: leveled logging and
//! boot-time configuration parsing.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod cmdline;
pub mod klog;

pub use cmdline::{cmdline_u8, tokens};
pub use klog::{
    KlogBackend, KlogLevel, klog_clear_backend, klog_get_level, klog_init, klog_register_backend,
    klog_set_level,
};
