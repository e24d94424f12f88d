//! # Mock Factory
//!
//! Utilities for testing the resolver without a real resource registry.
//!
//! [`MockFactory`] answers `new_instance` calls from a queue of expectations, in order.
//! Each expectation names the URI it expects and what to return.
//!
//! ```
//! use siren_actions::mock::MockFactory;
//! use siren_actions::{ActionError, ResourceFactory};
//!
//! let mock = MockFactory::new();
//! mock.expect_new_instance("app://self/gone")
//!     .return_err(ActionError::unresolvable("app://self/gone", "not found"));
//!
//! assert!(mock.new_instance("app://self/gone").is_err());
//! mock.verify();
//! ```

use crate::error::{ActionError, Result};
use crate::method::RequestMethod;
use crate::resource::{ResourceFactory, ResourceHandle, ResourceUri};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation {
    uri: String,
    response: Result<ResourceHandle>,
}

/// A [`ResourceFactory`] with expectation tracking for fluent testing.
#[derive(Clone, Default)]
pub struct MockFactory {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl MockFactory {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `new_instance` call for exactly `uri`.
    pub fn expect_new_instance(&self, uri: impl Into<String>) -> NewInstanceExpectationBuilder {
        NewInstanceExpectationBuilder {
            uri: uri.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl ResourceFactory for MockFactory {
    fn new_instance(&self, uri: &str) -> Result<ResourceHandle> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(Expectation { uri: expected, response }) if expected == uri => response,
            Some(Expectation { uri: expected, .. }) => {
                panic!("Unexpected new_instance({uri}), expected new_instance({expected})")
            }
            None => panic!("Unexpected new_instance({uri}), no expectations left"),
        }
    }
}

/// Builder for `new_instance` expectations.
pub struct NewInstanceExpectationBuilder {
    uri: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl NewInstanceExpectationBuilder {
    /// Returns a handle for the expected URI answering the given verbs.
    pub fn return_ok(self, methods: impl IntoIterator<Item = RequestMethod>) {
        let response = ResourceUri::parse(&self.uri).map(|uri| ResourceHandle::new(uri, methods));
        self.push(response);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ActionError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<ResourceHandle>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            uri: self.uri,
            response,
        });
    }
}
