/*
    This module helps with parsing deriveration paths passed in as strings
    as vectors of ChildOptions that can be used to derive a child key.
*/

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    hdwallet::{ChildOptions, HARDENED_OFFSET}
};

const HARDENED_MARKER: char = '\'';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub children: Vec<ChildOptions>
}

impl Path {
    pub fn empty() -> Self {
        Self {
            children: vec![]
        }
    }

    pub fn new(children: Vec<ChildOptions>) -> Self {
        Self { children }
    }
}

impl FromStr for Path {
    type Err = Error;

    /// Parses paths like `m/44'/1'/0'` or `m/1/4`. Every "m" segment is skipped.
    fn from_str(path: &str) -> Result<Self> {
        let bad_segment = |segment: &str| Error::InvalidPath {
            path: path.to_string(),
            segment: segment.to_string()
        };

        let mut children: Vec<ChildOptions> = vec![];
        for segment in path.split('/') {
            if segment == "m" { continue }

            let hardened = segment.contains(HARDENED_MARKER);
            let digits = segment.replace(HARDENED_MARKER, "");
            let index: u32 = digits.parse().map_err(|_| bad_segment(segment))?;

            //Indexes at or above 2^31 are reserved for the hardened range
            if index >= HARDENED_OFFSET { return Err(bad_segment(segment)) }

            children.push(if hardened {
                ChildOptions::Hardened(index)
            } else {
                ChildOptions::Normal(index)
            });
        }

        Ok(Self { children })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("m")?;
        for child in &self.children {
            match child {
                ChildOptions::Normal(x) => write!(f, "/{}", x)?,
                ChildOptions::Hardened(x) => write!(f, "/{}'", x)?
            }
        }

        Ok(())
    }
}
