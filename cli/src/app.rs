use crate::cli_options::Args;
use color_eyre::eyre::{Result, WrapErr};
use log::info;
use sopa_core::{WordSearchGenerator, render};
use sopa_external::{load_settings, write_text};
use std::io::Write;

/// Generate the puzzle, print it to `out`, and save it.
///
/// The per-word report goes to `err` when requested.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let settings = load_settings(args.config.as_deref()).wrap_err("Failed to load settings")?;
    let settings = args.apply(settings).wrap_err("Failed to read word list")?;

    let generator = WordSearchGenerator::new(settings.generator);
    let search = generator.generate()?;

    let text = render::to_text(&search);
    write!(out, "{}", text)?;

    write_text(&settings.output, &text).wrap_err_with(|| {
        format!("Failed to write puzzle to {}", settings.output.display())
    })?;
    writeln!(out, "Sopa de letras guardada en '{}'", settings.output.display())?;

    if args.report {
        write!(err, "{}", render::report_text(&search))?;
    }
    info!(
        "{} of {} words hidden",
        search.placements().count(),
        search.report.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir, output: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "sopa-de-letras".to_string(),
            "--config".to_string(),
            dir.path().join("config.json").display().to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::parse_from(argv)
    }

    fn write_config(dir: &TempDir) {
        std::fs::write(dir.path().join("config.json"), r#"{ "size": 8, "seed": 21 }"#).unwrap();
    }

    #[test]
    fn test_console_matches_file_and_confirms_last() {
        let dir = TempDir::new().unwrap();
        write_config(&dir);
        let output = dir.path().join("sopa_de_letras.txt");
        let args = args_for(&dir, &output, &["-w", "niño", "-w", "RGB"]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&args, &mut out, &mut err).unwrap();

        let saved = std::fs::read_to_string(&output).unwrap();
        let console = String::from_utf8(out).unwrap();
        let confirmation = format!("Sopa de letras guardada en '{}'\n", output.display());

        assert!(saved.starts_with("SOPA DE LETRAS\n================\n"));
        assert_eq!(console, format!("{}{}", saved, confirmation));
        assert!(err.is_empty());
    }

    #[test]
    fn test_report_goes_to_stderr() {
        let dir = TempDir::new().unwrap();
        write_config(&dir);
        let output = dir.path().join("sopa.txt");
        let args = args_for(&dir, &output, &["-w", "RGB", "-w", "PROCESADORES", "--report"]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&args, &mut out, &mut err).unwrap();

        let report = String::from_utf8(err).unwrap();
        assert!(report.contains("PROCESADORES: skipped, longer than the grid"));
        assert!(report.contains("RGB: placed at row"));
        assert!(!String::from_utf8(out).unwrap().contains("skipped"));
    }

    #[test]
    fn test_unwritable_output_is_an_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir);
        let output = dir.path().join("missing-dir").join("sopa.txt");
        let args = args_for(&dir, &output, &[]);

        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(run(&args, &mut out, &mut err).is_err());
        assert!(!output.exists());
        // the grid was printed before the write failed, the confirmation never was
        let console = String::from_utf8(out).unwrap();
        assert!(console.starts_with("SOPA DE LETRAS\n"));
        assert!(!console.contains("guardada"));
    }
}
