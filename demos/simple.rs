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

use jiff::tz::TimeZone;
use log::Level;
use logline::Layout;
use logline::Record;
use logline::layout::LineLayout;

fn main() -> anyhow::Result<()> {
    let layout = LineLayout::default().timezone(TimeZone::UTC);

    let record = Record::builder()
        .level(Level::Info)
        .timestamp_millis(0)
        .message("started")
        .build();
    print!("{}", layout.format(&record)?);

    let record = Record::builder()
        .level(Level::Error)
        .message("disk full")
        .build();
    print!("{}", layout.format(&record)?);

    Ok(())
}
