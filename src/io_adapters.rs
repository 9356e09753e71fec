use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::io::{BufRead, Result as IoResult, Write};
use std::rc::Rc;

/// Source of user input lines.
///
/// `Ok(None)` means no more input will ever arrive (end of file, or the user
/// pressed Ctrl-C / Ctrl-D in the editor).
pub trait LineInput {
    /// Show `prompt` and read one line without its terminator.
    fn read_line(&mut self, prompt: &str) -> IoResult<Option<String>>;
}

/// Interactive terminal input backed by rustyline, with in-session history.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self, prompt: &str) -> IoResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(readline_to_io)?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(readline_to_io(err)),
        }
    }
}

fn readline_to_io(err: ReadlineError) -> std::io::Error {
    match err {
        ReadlineError::Io(e) => e,
        other => std::io::Error::other(other),
    }
}

/// Line input over any buffered reader, echoing prompts to `prompt_out`.
///
/// Used for piped standard input and for scripted input in tests.
pub struct LineReader<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineInput for LineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> IoResult<Option<String>> {
        writeln!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        // only the terminator is removed, whitespace is part of the answer
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Memory-backed writer for capturing console output.
#[derive(Clone, Default)]
pub struct MemWriter {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl MemWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }
}

impl Write for MemWriter {
    fn write(&mut self, data: &[u8]) -> IoResult<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

/// Input and output a menu talks to.
pub struct Console {
    input: Box<dyn LineInput>,
    output: Box<dyn Write>,
}

impl Console {
    pub fn new(input: Box<dyn LineInput>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Terminal console: rustyline when stdin is a tty, plain line reads otherwise.
    pub fn stdio() -> anyhow::Result<Self> {
        use std::io::IsTerminal;

        let input: Box<dyn LineInput> = if std::io::stdin().is_terminal() {
            Box::new(EditorInput::new()?)
        } else {
            Box::new(LineReader::new(
                std::io::stdin().lock(),
                std::io::stdout(),
            ))
        };
        Ok(Self::new(input, Box::new(std::io::stdout())))
    }

    /// Console reading `script` line by line and writing everything to one
    /// shared in-memory buffer.
    pub fn scripted(script: &str) -> (Self, MemWriter) {
        let out = MemWriter::new();
        let reader = LineReader::new(std::io::Cursor::new(script.to_owned()), out.clone());
        (Self::new(Box::new(reader), Box::new(out.clone())), out)
    }

    pub fn prompt(&mut self, text: &str) -> IoResult<Option<String>> {
        self.input.read_line(text)
    }

    pub fn say(&mut self, text: &str) -> IoResult<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }
}
