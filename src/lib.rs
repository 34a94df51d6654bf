pub mod code;
pub mod config;
pub mod escape;
pub mod heading;
pub mod inline;
pub mod lines;
pub mod normalize;

use config::Config;
use regex::Regex;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

pub use escape::{escape_chars, unescape_chars};

/// Markdown to Telegram HTML converter.
///
/// Holds no state; one value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Converter
    }

    pub fn convert(&self, markdown: &str) -> String {
        let output = self.post_process(&self.pre_process(markdown));
        debug!(input = markdown.len(), output = output.len(), "converted markdown");
        output
    }

    /// Runs the structural passes in order. Each pass sees the full output
    /// of the one before it.
    pub fn pre_process(&self, text: &str) -> String {
        let passes: [(&str, fn(&str) -> String); 9] = [
            ("clean_input", normalize::clean_input),
            ("fenced_code_blocks", code::fenced_code_blocks),
            ("inline_code", code::inline_code),
            ("heading", heading::heading),
            ("image", inline::image),
            ("link", inline::link),
            ("list", lines::list),
            ("quote", lines::quote),
            ("emphasis", inline::emphasis),
        ];

        let mut text = text.to_string();
        for (name, pass) in passes {
            text = pass(&text);
            trace!(pass = name, len = text.len(), "pass done");
        }
        text
    }

    pub fn post_process(&self, text: &str) -> String {
        normalize::post_process(text)
    }
}

pub fn convert(markdown: &str) -> String {
    Converter::new().convert(markdown)
}

/// True when the inputs ask for stdin: none at all, or a lone `-`.
pub fn reads_stdin(inputs: &[PathBuf]) -> bool {
    inputs.is_empty() || (inputs.len() == 1 && is_stdin_marker(&inputs[0]))
}

fn is_stdin_marker(p: &Path) -> bool {
    p.as_os_str() == "-"
}

fn extension_pattern(extensions: &[String]) -> io::Result<Option<Regex>> {
    let alternatives: Vec<String> = extensions
        .iter()
        .map(|e| e.trim_start_matches('.'))
        .filter(|e| !e.is_empty())
        .map(regex::escape)
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }
    Regex::new(&format!(r"(?i)\.({})$", alternatives.join("|")))
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

/// Collects input files, walking directories recursively. Directory entries
/// are kept only when their extension is in `extensions` (a leading dot is
/// ignored; an empty list keeps none); files named explicitly are always
/// kept. `-` is only accepted on its own, see [`reads_stdin`].
pub fn list_files(inputs: &[PathBuf], extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let re = extension_pattern(extensions)?;

    let mut out: Vec<PathBuf> = Vec::new();
    for p in inputs {
        if is_stdin_marker(p) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "`-` (stdin) must be the only input",
            ));
        }
        if p.is_dir() {
            if let Some(ref re) = re {
                walk(p, re, &mut out)?;
            }
        } else if p.is_file() {
            out.push(p.clone());
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", p.display()),
            ));
        }
    }

    out.sort();
    Ok(out)
}

/// Converts every file the inputs resolve to, each on its own, and joins
/// the outputs with `config.separator`.
pub fn convert_files(inputs: &[PathBuf], config: &Config) -> io::Result<String> {
    let files = list_files(inputs, &config.extensions)?;
    if files.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no input files found",
        ));
    }

    let converter = Converter::new();
    let mut outputs = Vec::with_capacity(files.len());
    for fp in &files {
        let content = fs::read_to_string(fp).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot read {}: {}", fp.display(), e))
        })?;
        outputs.push(converter.convert(&content));
    }
    debug!(files = files.len(), "converted input files");
    Ok(outputs.join(&config.separator))
}

fn walk(dir: &Path, re: &Regex, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let sub_path = entry?.path();
        if sub_path.is_dir() {
            walk(&sub_path, re, out)?;
        } else if sub_path.is_file() {
            if let Some(path_str) = sub_path.to_str() {
                if re.is_match(path_str) {
                    out.push(sub_path);
                }
            }
        }
    }
    Ok(())
}
