use anyhow::{Context, Result};
use greeting::startup_lines;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

/// Writes the two startup lines: the fixed banner, then the arguments
/// joined by single spaces. No flags are recognized; every argument is
/// passed through literally.
fn run<W: Write>(args: &[String], out: &mut W) -> Result<()> {
    for line in startup_lines(args) {
        writeln!(out, "{line}").context("writing startup output")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(args: &[&str]) -> String {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_echoes_args_after_banner() {
        assert_eq!(output_for(&["foo", "bar"]), "Hello, Browser!\nfoo bar\n");
    }

    #[test]
    fn test_run_emits_empty_line_without_args() {
        assert_eq!(output_for(&[]), "Hello, Browser!\n\n");
    }

    #[test]
    fn test_run_passes_flag_like_args_through() {
        // No argument parsing, "--help" is just another token
        assert_eq!(
            output_for(&["--help", "-v"]),
            "Hello, Browser!\n--help -v\n"
        );
    }
}
