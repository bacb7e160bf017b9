#![doc = r#"
basics-qa: command-line bootstrap conventions in one small tool.

The tool reads its version from a `VERSION` file, parses one positional
argument, an optional `-o` value and a repeatable `-v`, sets the logging
level from the `-v` count, and reports a one-line summary.

Lifecycle
---------
```rust,no_run
use basics_qa::{LogSink, Runner};

fn main() -> basics_qa::Result<()> {
    let session = Runner::new()?
        .bootstrap(std::env::args_os(), LogSink::Stderr)
        .unwrap_or_else(|err| err.exit());
    let completion = session.run(true, &mut std::io::stdout())?;
    std::process::exit(completion.exit_code())
}
```

Capturing log records
---------------------
```rust
use basics_qa::{LogSink, Runner};

let (sink, records) = LogSink::capture();
let mut out = Vec::new();
Runner::with_version("1.2.3")
    .bootstrap(["basics-qa", "-v", "ARGUMENT1"], sink)
    .unwrap()
    .run(false, &mut out)
    .unwrap();

let records = records.lock().unwrap();
assert_eq!(records[0].message, "Logging set to INFO");
```
"#]

pub mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod version;

pub use api::{Completion, Runner, Session};
pub use args::CliArgs;
pub use config::RunConfiguration;
pub use error::{Error, Result};
pub use logging::{LogBuffer, LogEntry, LogSettings, LogSink};
pub use types::{LogFormat, Verbosity};
pub use version::{VERSION_FILE, Version};
