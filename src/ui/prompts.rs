//! Line-oriented prompt helpers. Both functions take the input and output
//! streams as parameters instead of touching stdin/stdout directly, which is
//! what lets the search-loop tests drive them from in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Print a prompt without a trailing newline, then read one line and return
/// it trimmed. Exhausted input is a hard error; every caller treats a closed
/// stream as unrecoverable.
pub fn prompt_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<String> {
    write!(output, "{message}").context("failed to write prompt")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        bail!("input stream closed");
    }

    Ok(line.trim().to_string())
}

/// Generic Y/N menu which uses a custom prompt message. Re-prompts on any
/// answer other than a case-insensitive "y" or "n", including an empty one,
/// until a valid choice arrives.
pub fn yes_no_menu(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<bool> {
    loop {
        let choice = prompt_line(input, output, &format!("{message} (Y/N)"))?;
        match choice.to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(output, "Invalid choice, try again")
                .context("failed to write menu message")?,
        }
    }
}
