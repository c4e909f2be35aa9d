use crate::cli::PauseMode;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Read};

/// Decides whether to wait for a keypress. `PauseMode::Auto` only waits when both ends of the
/// console are interactive, so piping the output or running under a test harness never blocks.
pub fn should_pause(mode: PauseMode) -> bool {
    match mode {
        PauseMode::Always => true,
        PauseMode::Never => false,
        PauseMode::Auto => atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout),
    }
}

/// Where the keypress that ends the program comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeySource {
    /// An interactive terminal, read one key at a time in raw mode.
    Terminal,
    /// Redirected stdin, where the first byte counts as the key.
    Stream,
}

impl KeySource {
    pub fn detect() -> KeySource {
        KeySource::for_stdin(atty::is(atty::Stream::Stdin))
    }

    fn for_stdin(interactive: bool) -> KeySource {
        if interactive {
            KeySource::Terminal
        } else {
            KeySource::Stream
        }
    }
}

/// Blocks until a key is pressed on `source`.
pub fn wait(source: KeySource) -> io::Result<()> {
    tracing::debug!(?source, "waiting for a keypress");
    match source {
        KeySource::Terminal => wait_for_terminal_key(),
        KeySource::Stream => {
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            wait_for_keypress(&mut stdin).map(|_| ())
        }
    }
}

/// Line buffering would hold the key back until Enter, so the terminal is switched to raw mode
/// for the duration of the read.
fn wait_for_terminal_key() -> io::Result<()> {
    enable_raw_mode()?;
    let result = read_key_press();
    disable_raw_mode()?;
    result
}

fn read_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Release and repeat events are reported on some platforms.
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Blocks until a single byte can be read from `input`. Returns `false` if the input was already
/// closed.
pub fn wait_for_keypress<R: Read + ?Sized>(input: &mut R) -> io::Result<bool> {
    let mut key = [0u8; 1];
    loop {
        match input.read(&mut key) {
            Ok(0) => return Ok(false),
            Ok(_) => return Ok(true),
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct InterruptOnce {
        interrupted: bool,
    }

    impl Read for InterruptOnce {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            buf[0] = b'\n';
            Ok(1)
        }
    }

    #[test]
    fn test_reads_exactly_one_key() {
        let mut input = Cursor::new(b"ab".to_vec());
        assert!(wait_for_keypress(&mut input).unwrap());
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_closed_input_does_not_block() {
        let mut input = Cursor::new(Vec::new());
        assert!(!wait_for_keypress(&mut input).unwrap());
    }

    #[test]
    fn test_retries_after_interrupt() {
        let mut input = InterruptOnce { interrupted: false };
        assert!(wait_for_keypress(&mut input).unwrap());
    }

    #[test]
    fn test_explicit_modes() {
        assert!(should_pause(PauseMode::Always));
        assert!(!should_pause(PauseMode::Never));
    }

    #[test]
    fn test_terminal_stdin_reads_single_keys() {
        assert_eq!(KeySource::for_stdin(true), KeySource::Terminal);
        assert_eq!(KeySource::for_stdin(false), KeySource::Stream);
    }

    #[test]
    fn test_redirected_stdin_is_read_as_a_stream() {
        // Only checkable when stdin is redirected.
        if !atty::is(atty::Stream::Stdin) {
            assert_eq!(KeySource::detect(), KeySource::Stream);
        }
    }
}
