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

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::layout::Layout;
use crate::record::Record;

type FormatFunction = dyn Fn(&Record) -> anyhow::Result<String> + Send + Sync + 'static;

/// A layout that you can pass the custom layout function.
///
/// The custom layout function accepts a [`&Record`][Record] and returns the
/// rendered line. For example:
///
/// ```rust
/// use logline::Record;
/// use logline::layout::CustomLayout;
///
/// let layout = CustomLayout::new(|record: &Record| {
///     Ok(format!("{} - {}\n", record.level(), record.message()))
/// });
/// ```
pub struct CustomLayout {
    f: Box<FormatFunction>,
}

impl Debug for CustomLayout {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "CustomLayout {{ ... }}")
    }
}

impl CustomLayout {
    /// Creates a layout that delegates to the given function.
    pub fn new(
        layout: impl Fn(&Record) -> anyhow::Result<String> + Send + Sync + 'static,
    ) -> Self {
        CustomLayout {
            f: Box::new(layout),
        }
    }
}

impl Layout for CustomLayout {
    fn format(&self, record: &Record) -> anyhow::Result<String> {
        (self.f)(record)
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn test_custom_layout() {
        let layout = CustomLayout::new(|record: &Record| {
            Ok(format!("[{}] {}\n", record.level(), record.message()))
        });

        let record = Record::builder()
            .level(Level::Warn)
            .message("low disk space")
            .build();
        assert_eq!(layout.format(&record).unwrap(), "[WARN] low disk space\n");
    }

    #[test]
    fn test_boxed_layout_forwards() {
        let layout: Box<dyn Layout> =
            Box::new(CustomLayout::new(|record: &Record| {
                Ok(record.message().to_string())
            }));

        let record = Record::builder().message("pass through").build();
        assert_eq!(layout.format(&record).unwrap(), "pass through");
    }
}
