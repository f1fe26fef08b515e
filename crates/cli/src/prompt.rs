//! Line-based prompts.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};

/// Print `label: ` and parse the next input line as `T`.
///
/// Fails on end of input or when the line does not parse.
pub fn read_value<T>(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("No {} given", label);
    }

    let value = line.trim();
    value
        .parse::<T>()
        .with_context(|| format!("Invalid {}: '{}'", label, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_trimmed_value() {
        let mut input = &b"  3 \n"[..];
        let mut output = Vec::new();

        let value: usize = read_value(&mut input, &mut output, "id").unwrap();

        assert_eq!(value, 3);
        assert_eq!(String::from_utf8(output).unwrap(), "id: ");
    }

    #[test]
    fn test_reads_successive_lines() {
        let mut input = &b"1\n4\n"[..];
        let mut output = Vec::new();

        let id: usize = read_value(&mut input, &mut output, "id").unwrap();
        let count: usize = read_value(&mut input, &mut output, "count").unwrap();

        assert_eq!((id, count), (1, 4));
        assert_eq!(String::from_utf8(output).unwrap(), "id: count: ");
    }

    #[test]
    fn test_rejects_non_numeric() {
        let mut input = &b"two\n"[..];
        let mut output = Vec::new();

        let err = read_value::<usize>(&mut input, &mut output, "count").unwrap_err();

        assert_eq!(err.to_string(), "Invalid count: 'two'");
    }

    #[test]
    fn test_rejects_empty_input() {
        let mut input = &b""[..];
        let mut output = Vec::new();

        let err = read_value::<usize>(&mut input, &mut output, "id").unwrap_err();

        assert_eq!(err.to_string(), "No id given");
    }
}
