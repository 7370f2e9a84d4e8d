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

use jiff::Timestamp;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats a log record as one line of text.
///
/// Output format:
///
/// ```text
/// INFO - 1970-01-01 00:00:00 UTC: started
/// ERROR - 2023-11-14 22:13:20 UTC: disk full
/// ```
///
/// Each line is newline-terminated. The message is written through as-is;
/// embedded newlines are neither escaped nor stripped.
///
/// You can customize the timezone of the timestamp by setting the `tz` field
/// with a [`TimeZone`] instance. Otherwise, the system timezone is used.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use logline::layout::LineLayout;
///
/// let line_layout = LineLayout::default().timezone(TimeZone::UTC);
/// ```
#[derive(Default, Debug, Clone)]
pub struct LineLayout {
    tz: Option<TimeZone>,
}

impl LineLayout {
    /// Sets the timezone for timestamps.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

impl Layout for LineLayout {
    fn format(&self, record: &Record) -> anyhow::Result<String> {
        let ts = Timestamp::from_millisecond(record.timestamp_millis())?;
        let tz = self.tz.clone().unwrap_or_else(TimeZone::system);
        let time = strtime::format("%Y-%m-%d %H:%M:%S %Z", &ts.to_zoned(tz))?;
        let level = record.level();
        let message = record.message();
        Ok(format!("{level} - {time}: {message}\n"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use jiff::civil::date;
    use log::Level;

    use super::*;

    fn utc() -> LineLayout {
        LineLayout::default().timezone(TimeZone::UTC)
    }

    #[test]
    fn test_format_epoch() {
        let record = Record::builder()
            .level(Level::Info)
            .timestamp_millis(0)
            .message("started")
            .build();

        let line = utc().format(&record).unwrap();
        assert_eq!(line, "INFO - 1970-01-01 00:00:00 UTC: started\n");
    }

    #[test]
    fn test_format_known_instant() {
        let instant = date(2023, 11, 14)
            .at(22, 13, 20, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        let millis = instant.timestamp().as_millisecond();
        assert_eq!(millis, 1_700_000_000_000);

        let record = Record::builder()
            .level(Level::Error)
            .timestamp_millis(millis)
            .message("disk full")
            .build();

        let line = utc().format(&record).unwrap();
        assert_eq!(line, "ERROR - 2023-11-14 22:13:20 UTC: disk full\n");
    }

    #[test]
    fn test_format_is_idempotent() {
        let record = Record::builder()
            .level(Level::Debug)
            .timestamp_millis(86_400_000)
            .message("tick")
            .build();

        let layout = utc();
        assert_eq!(
            layout.format(&record).unwrap(),
            layout.format(&record).unwrap()
        );
    }

    #[test]
    fn test_message_newlines_pass_through() {
        let record = Record::builder()
            .level(Level::Warn)
            .timestamp_millis(0)
            .message("first\nsecond")
            .build();

        let line = utc().format(&record).unwrap();
        assert_eq!(line, "WARN - 1970-01-01 00:00:00 UTC: first\nsecond\n");
    }

    #[test]
    fn test_empty_message() {
        let record = Record::builder().timestamp_millis(0).message("").build();

        let line = utc().format(&record).unwrap();
        assert_eq!(line, "INFO - 1970-01-01 00:00:00 UTC: \n");
    }

    #[test]
    fn test_posix_timezone() {
        let layout = LineLayout::default().timezone(TimeZone::posix("EST5").unwrap());
        let record = Record::builder()
            .level(Level::Info)
            .timestamp_millis(0)
            .message("started")
            .build();

        let line = layout.format(&record).unwrap();
        assert_eq!(line, "INFO - 1969-12-31 19:00:00 EST: started\n");
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let record = Record::builder()
            .timestamp_millis(i64::MAX)
            .message("too far out")
            .build();

        assert!(utc().format(&record).is_err());
    }

    #[test]
    fn test_concurrent_format() {
        let layout = Arc::new(utc());

        let handles = (0..8i64)
            .map(|i| {
                let layout = layout.clone();
                thread::spawn(move || {
                    let message = format!("worker {i}");
                    for _ in 0..100 {
                        let record = Record::builder()
                            .level(Level::Debug)
                            .timestamp_millis(i * 1_000)
                            .message(&message)
                            .build();
                        let line = layout.format(&record).unwrap();
                        assert_eq!(
                            line,
                            format!("DEBUG - 1970-01-01 00:00:0{i} UTC: worker {i}\n")
                        );
                    }
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
