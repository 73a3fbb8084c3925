//! Named numeric parameters and the copy-on-push scope stack.
//!
//! Scopes thread dimensions (`face_width`, `tab_height`, loop indices such
//! as `step`) into formula evaluation without explicit parameter passing.
//! Lookups resolve only against the top frame: pushing copies the current
//! top and applies overrides, so there is no dynamic fallback to outer
//! frames.

use std::collections::HashMap;

use crate::errors::Error;

/// A single frame of named numeric parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    vars: HashMap<String, f64>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.vars.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for Scope {
    fn from_iter<T: IntoIterator<Item = (N, f64)>>(iter: T) -> Self {
        Scope {
            vars: iter.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }
}

/// Stack of scope frames. The base frame (the configuration mapping) is
/// never popped.
#[derive(Debug)]
pub struct ScopeStack {
    frames: Vec<Scope>,
}

impl ScopeStack {
    pub fn new(base: Scope) -> Self {
        ScopeStack { frames: vec![base] }
    }

    /// The active frame; all lookups go through it.
    pub fn top(&self) -> &Scope {
        self.frames.last().unwrap()
    }

    /// Copy the top frame, apply `overrides`, make the result the new top.
    pub fn push(&mut self, overrides: &[(&str, f64)]) {
        let mut frame = self.top().clone();
        for (name, value) in overrides {
            frame.set(*name, *value);
        }
        self.frames.push(frame);
    }

    /// Discard the top frame, restoring the previous one.
    pub fn pop(&mut self) -> Result<(), Error> {
        if self.frames.len() <= 1 {
            return Err(Error::StackUnderflow { stack: "scope" });
        }
        self.frames.pop();
        Ok(())
    }

    /// Number of frames, counting the base.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
