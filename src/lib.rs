//! A library for reading and writing iTunes style MPEG-4 metadata through the AtomicParsley
//! command line tool.
//!
//! Tag names are translated between a caller facing canonical vocabulary and the tool's
//! native short atom codes: write requests are validated and filtered against the closed
//! set of [`WriteFlag`]s before the tool is invoked, and the tool's textual atom dump is
//! parsed back into a canonical [`TagSet`] on read.
//!
//! # Examples
//!
//! ## Reading
//! ```no_run
//! let ap = atomictag::AtomicParsley::provision().unwrap();
//!
//! let tags = ap.read_tags("music.m4a").unwrap();
//! println!("{}", tags.get("album").unwrap());
//! ```
//!
//! ## Writing
//! ```no_run
//! use atomictag::{AtomicParsley, TagSet, WriteFlag};
//!
//! let ap = AtomicParsley::provision().unwrap();
//!
//! let mut tags = TagSet::new();
//! tags.set(WriteFlag::Album, "album");
//! tags.set(WriteFlag::Artist, "artist");
//! ap.write_tags("music.m4a", tags).unwrap();
//! ```
//!
//! ## Using an already installed executable
//! ```no_run
//! let ap = atomictag::AtomicParsley::with_binary("/usr/bin/AtomicParsley");
//!
//! let tags = ap.read_tags("music.m4a").unwrap();
//! ```
#![warn(missing_docs)]

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::ident::{resolve_read_atom, WriteFlag};
pub use crate::invoke::{Invoker, Subprocess};
pub use crate::parse::parse_dump;
pub use crate::parsley::AtomicParsley;
pub use crate::tag::TagSet;

mod error;
mod ident;
mod invoke;
mod parse;
mod parsley;
mod provision;
mod tag;
