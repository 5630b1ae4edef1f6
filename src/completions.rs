//! Completion scripts for the `wordcard` command line.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the `shell` completion script for `cmd` into `out`, registered under
/// the command's own name.
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
