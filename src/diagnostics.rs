use crate::ast::Program;
use crate::error::{Error, LinkError, RuntimeError};

use ariadne::{Color, ColorGenerator, Config, Fmt, Label, Report, ReportKind, Source};
use yansi::Paint;

use std::ops::Range;

type Diagnostic<'a> = Report<'a, (String, Range<usize>)>;

/// Renders `error` against the source it came from. Runtime errors are
/// pointed at the failing instruction when `program` is given.
pub fn render(
    error: &Error,
    program: Option<&Program>,
    file: &str,
    source: &str,
    color: bool,
) -> String {
    let report = build(error, program, file, source.len(), color);

    let mut out = vec![];
    if report
        .write((file.to_string(), Source::from(source)), &mut out)
        .is_err()
    {
        // a Vec never fails to accept bytes, keep the plain message anyway
        return format!("error: {}\n", error);
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn build<'a>(
    error: &Error,
    program: Option<&Program>,
    file: &str,
    source_len: usize,
    color: bool,
) -> Diagnostic<'a> {
    let file = file.to_string();
    let mut colors = ColorGenerator::new();

    let (code, span, label) = match error {
        Error::Lex(err) => (
            "Lex Error",
            Some(err.span.clone()),
            format!(
                "{} does not start any token",
                Fmt::fg(&err.lexeme, Color::BrightRed).bold()
            ),
        ),
        Error::Parse(err) => ("Syntax Error", err.span(), err.to_string()),
        Error::Link(LinkError::DuplicateLabel { name, second, .. }) => (
            "Link Error",
            program.and_then(|p| p.span(*second)),
            format!(
                "label {} is already defined",
                Fmt::fg(name, Color::Blue).bold()
            ),
        ),
        Error::Runtime(err) => (
            "Runtime Error",
            err.pc().and_then(|pc| program.and_then(|p| p.span(pc))),
            err.root().to_string(),
        ),
    };
    let span = span.unwrap_or(source_len..source_len);

    let mut report = Report::build(ReportKind::Error, (file.clone(), span.clone()))
        .with_config(Config::default().with_color(color))
        .with_code(code)
        .with_message(error.to_string())
        .with_label(
            Label::new((file.clone(), span))
                .with_message(label)
                .with_color(colors.next()),
        );

    if let Error::Parse(err) = error {
        if let Some(opcode) = err.opcode() {
            report = report.with_note(opcode.syntax());
        }
    }
    if let Error::Link(LinkError::DuplicateLabel { first, .. }) = error {
        if let Some(first) = program.and_then(|p| p.span(*first)) {
            report = report.with_label(
                Label::new((file.clone(), first))
                    .with_message("first defined here")
                    .with_color(colors.next()),
            );
        }
    }
    if let Error::Runtime(err) = error {
        if let RuntimeError::StepLimitExceeded { .. } = err.root() {
            report = report.with_help("raise the limit with --max-steps");
        }
    }

    report.finish()
}
