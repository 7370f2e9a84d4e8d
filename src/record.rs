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

//! The log record model.

use jiff::Timestamp;
use log::Level;

/// The payload of a log event.
///
/// A record borrows its message from the caller and lives only for the
/// duration of a single [`Layout::format`](crate::Layout::format) call. The
/// message is already interpolated; layouts write it through without further
/// templating.
#[derive(Copy, Clone, Debug)]
pub struct Record<'a> {
    level: Level,
    timestamp_millis: i64,
    message: &'a str,
}

impl<'a> Record<'a> {
    /// Returns a builder with all fields set to their defaults.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }

    /// The verbosity level of the event.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The observed time, in milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    /// The message body.
    pub fn message(&self) -> &'a str {
        self.message
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                level: Level::Info,
                timestamp_millis: Timestamp::now().as_millisecond(),
                message: "",
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`timestamp_millis`](Record::timestamp_millis).
    pub fn timestamp_millis(mut self, millis: i64) -> Self {
        self.record.timestamp_millis = millis;
        self
    }

    /// Set [`message`](Record::message).
    pub fn message(mut self, message: &'a str) -> Self {
        self.record.message = message;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
