// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Supported theory fragments

mod qf_idl;

pub use qf_idl::QfIdlLogic;

use crate::Logic;

/// Look up a fragment by its SMT-LIB name, ignoring case.
pub fn logic_for_name(name: &str) -> Option<Box<dyn Logic>> {
    match name.to_ascii_uppercase().as_str() {
        qf_idl::LOGIC_NAME => Some(Box::new(QfIdlLogic)),
        _ => None,
    }
}

pub fn supported_logics() -> &'static [&'static str] {
    &[qf_idl::LOGIC_NAME]
}
