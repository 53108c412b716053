use crate::phrases::PhraseReport;
use colored::*;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PhraseReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &PhraseReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &PhraseReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_phrase_table(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &PhraseReport) -> anyhow::Result<()> {
        let params = &report.params;
        writeln!(self.writer, "# Repeated Phrases")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Phrases of {}-{} words seen at least {} times.",
            params.min_len, params.max_len, params.min_occurrences
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Sentences: {}", report.sentence_count)?;
        writeln!(self.writer, "- Distinct phrases: {}", report.distinct_phrases)?;
        writeln!(
            self.writer,
            "- Qualifying phrases: {}",
            report.qualifying_phrases
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_phrase_table(&mut self, report: &PhraseReport) -> anyhow::Result<()> {
        if report.phrases.is_empty() {
            writeln!(self.writer, "_No repeated phrases found._")?;
            return Ok(());
        }

        writeln!(self.writer, "| Rank | Phrase | Count |")?;
        writeln!(self.writer, "|------|--------|-------|")?;
        for (rank, ranked) in report.phrases.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                rank + 1,
                ranked.phrase,
                ranked.count
            )?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &PhraseReport) -> anyhow::Result<()> {
        let title = self.paint("Repeated Phrases", |s| s.bold().blue());
        let rule = self.paint("================", |s| s.blue());
        writeln!(self.writer, "{}", title)?;
        writeln!(self.writer, "{}", rule)?;
        writeln!(
            self.writer,
            "  Sentences: {}  Distinct phrases: {}  Qualifying: {}",
            report.sentence_count, report.distinct_phrases, report.qualifying_phrases
        )?;
        writeln!(self.writer)?;

        if report.phrases.is_empty() {
            let none = self.paint("No repeated phrases found.", |s| s.yellow());
            writeln!(self.writer, "{}", none)?;
            return Ok(());
        }

        let width = report.phrases.len().to_string().len();
        for (rank, ranked) in report.phrases.iter().enumerate() {
            let count = self.paint(&format!("x{}", ranked.count), |s| s.green());
            writeln!(
                self.writer,
                "  {:>width$}. {}  {}",
                rank + 1,
                ranked.phrase,
                count,
                width = width
            )?;
        }
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    color: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, color)),
    }
}
