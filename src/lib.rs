// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logline renders log records as single lines of text.
//!
//! # Overview
//!
//! Logline is a formatting component, not a logging framework. A host
//! framework hands it one record per call, carrying a severity level, an
//! epoch-millisecond timestamp, and an already-interpolated message, and
//! writes the returned line to its own sinks. Filtering, dispatch, and all
//! I/O stay with the host.
//!
//! [`LineLayout`](layout::LineLayout) renders each record as
//! `LEVEL - yyyy-MM-dd HH:mm:ss z: message`, one newline-terminated line per
//! record.
//!
//! # Examples
//!
//! ```
//! use jiff::tz::TimeZone;
//! use log::Level;
//! use logline::Layout;
//! use logline::Record;
//! use logline::layout::LineLayout;
//!
//! let layout = LineLayout::default().timezone(TimeZone::UTC);
//!
//! let record = Record::builder()
//!     .level(Level::Info)
//!     .timestamp_millis(0)
//!     .message("started")
//!     .build();
//! let line = layout.format(&record).unwrap();
//! assert_eq!(line, "INFO - 1970-01-01 00:00:00 UTC: started\n");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod layout;

pub use layout::Layout;

mod record;
pub use record::Record;
pub use record::RecordBuilder;
