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

//! Layouts for formatting log records.

use std::fmt;

pub use custom::CustomLayout;
pub use line::LineLayout;

use crate::record::Record;

mod custom;
mod line;

/// Represents a layout for formatting log records.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log record into its textual rendering.
    ///
    /// The returned string is complete; the host framework writes it to its
    /// sinks verbatim.
    fn format(&self, record: &Record) -> anyhow::Result<String>;
}

impl Layout for Box<dyn Layout> {
    fn format(&self, record: &Record) -> anyhow::Result<String> {
        (**self).format(record)
    }
}
