use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Spaces per depth level
pub const INDENT_SIZE: usize = 2;

/// Semantic style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Section labels
    Comment,
    /// Directory headers
    Info,
    /// Uncompressed marker
    Red,
    /// Compression algorithm marker
    Cyan,
}

impl Style {
    /// Console markup tag name
    pub fn tag(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Info => "info",
            Self::Red => "fg=red",
            Self::Cyan => "fg=cyan",
        }
    }
}

/// How styles reach the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// Drop styles, write bare text
    #[default]
    Plain,
    /// Wrap styled spans in console tags (`<comment>...</comment>`)
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub style: Option<Style>,
    pub text: String,
}

/// A line of output built from styled spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unstyled text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            style: None,
            text: text.into(),
        });
        self
    }

    /// Append styled text
    pub fn styled(mut self, style: Style, text: impl Into<String>) -> Self {
        self.spans.push(Span {
            style: Some(style),
            text: text.into(),
        });
        self
    }

    /// Line starting with a `<comment>` label
    pub fn label(label: impl Into<String>) -> Self {
        Self::new().styled(Style::Comment, label)
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text with all styles dropped
    pub fn to_plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Text with styles rendered as console tags
    pub fn to_tagged(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            let text = escape(&span.text);
            match span.style {
                Some(style) => {
                    out.push('<');
                    out.push_str(style.tag());
                    out.push('>');
                    out.push_str(&text);
                    out.push_str("</");
                    out.push_str(style.tag());
                    out.push('>');
                }
                None => out.push_str(&text),
            }
        }
        out
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::new().text(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::new().text(text)
    }
}

/// Escape `<` so user text is never read back as a tag
fn escape(text: &str) -> String {
    text.replace('<', "\\<")
}

/// Line-oriented writer over any sink
pub struct LinePrinter<W: Write> {
    sink: W,
    markup: Markup,
}

impl<W: Write> LinePrinter<W> {
    pub fn new(sink: W, markup: Markup) -> Self {
        Self { sink, markup }
    }

    /// Printer that drops all styles
    pub fn plain(sink: W) -> Self {
        Self::new(sink, Markup::Plain)
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Write a line without a trailing newline
    pub fn write(&mut self, line: &Line) -> Result<()> {
        let rendered = match self.markup {
            Markup::Plain => line.to_plain(),
            Markup::Tags => line.to_tagged(),
        };
        self.sink.write_all(rendered.as_bytes())?;
        Ok(())
    }

    pub fn writeln(&mut self, line: &Line) -> Result<()> {
        self.write(line)?;
        self.newline()
    }

    pub fn newline(&mut self) -> Result<()> {
        self.sink.write_all(b"\n")?;
        Ok(())
    }

    /// Write a line indented by `depth` levels when `indent` is set
    pub fn print(&mut self, line: &Line, depth: usize, indent: bool) -> Result<()> {
        if indent {
            let padding = " ".repeat(depth * INDENT_SIZE);
            self.sink.write_all(padding.as_bytes())?;
        }
        self.writeln(line)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
