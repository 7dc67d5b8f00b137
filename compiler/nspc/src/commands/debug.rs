//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use nsp_diagnostic::emitter::{ColorMode, SourceFile};
use nsp_lexer::{LogicalStatement, StatementReader};

use super::read_file;
use crate::reporting::{emit_to_stderr, session_diagnostic};
use crate::session::SessionError;

/// Print the tokens of each logical statement in a file.
pub fn lex_file(path: &str, color: ColorMode) -> ExitCode {
    for_each_statement(path, color, |statement| {
        let output = nsp_lexer::lex(&statement.text);
        println!(
            "Statement at line {} ({} tokens):",
            statement.line,
            output.tokens.len()
        );
        for token in &output.tokens {
            println!("  {token:?}");
        }
        for error in &output.errors {
            println!("  error: {error} @ {}", error.span);
        }
        Ok(())
    })
}

/// Print the syntax tree of each logical statement in a file.
///
/// Stops at the first statement that does not parse.
pub fn parse_file(path: &str, color: ColorMode) -> ExitCode {
    for_each_statement(path, color, |statement| {
        match nsp_parse::parse_text(&statement.text) {
            Ok(stmt) => {
                println!("Statement at line {}:", statement.line);
                println!("{stmt:#?}");
                Ok(())
            }
            Err(error) => Err(SessionError::Parse {
                error,
                statement: statement.clone(),
            }),
        }
    })
}

fn for_each_statement(
    path: &str,
    color: ColorMode,
    mut visit: impl FnMut(&LogicalStatement) -> Result<(), SessionError>,
) -> ExitCode {
    let content = match read_file(path, color) {
        Ok(content) => content,
        Err(code) => return code,
    };

    let mut reader = StatementReader::new(content.as_bytes());
    let result = loop {
        match reader.next_statement() {
            Ok(Some(statement)) => {
                if let Err(err) = visit(&statement) {
                    break Err(err);
                }
            }
            Ok(None) => break Ok(()),
            Err(err) => break Err(SessionError::from(err)),
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let source = SourceFile::new(path, content.as_str());
            emit_to_stderr(&session_diagnostic(&err), Some(source), color);
            ExitCode::FAILURE
        }
    }
}
