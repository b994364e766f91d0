use std::io;

use crate::prompt::PromptError;
use crate::prompt::terminal::channel_error;

#[test]
fn interrupted_terminal_read_is_an_abort() {
    let err = channel_error(
        "Select Input Method",
        dialoguer::Error::IO(io::Error::from(io::ErrorKind::Interrupted)),
    );
    assert!(matches!(err, PromptError::Aborted { ref label } if label == "Select Input Method"));
}

#[test]
fn other_terminal_failures_keep_the_io_error() {
    let err = channel_error(
        "Enter Topic (string)",
        dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone")),
    );
    match err {
        PromptError::Channel { label, source } => {
            assert_eq!(label, "Enter Topic (string)");
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
