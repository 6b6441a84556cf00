use std::fmt;

use super::errors::{BTCWireError, Result};

pub const COMMAND_NAME_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Version,
    VerAck,
    GetData,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Version => "version",
            Command::VerAck => "verack",
            Command::GetData => "getdata",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 12-byte, NUL-padded command field of a message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandName([u8; COMMAND_NAME_SIZE]);

impl CommandName {
    /// Left-justifies `name` and pads it with NUL bytes.
    /// Names longer than 12 bytes are rejected, never truncated. An empty
    /// name would be an all-NUL field and is rejected too.
    pub fn new(name: &str) -> Result<Self> {
        let bytes = name.as_bytes();
        if bytes.len() > COMMAND_NAME_SIZE {
            return Err(BTCWireError::CommandTooLong(bytes.len()));
        }
        if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_graphic()) {
            return Err(BTCWireError::InvalidCommand);
        }

        let mut buffer = [0u8; COMMAND_NAME_SIZE];
        buffer[..bytes.len()].copy_from_slice(bytes);

        Ok(Self(buffer))
    }

    /// Takes the raw field of a received header as is.
    pub fn from_bytes(bytes: [u8; COMMAND_NAME_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; COMMAND_NAME_SIZE] {
        &self.0
    }

    /// The name without its NUL padding, lossy for non-ASCII peers.
    pub fn name(&self) -> String {
        let end = self
            .0
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(COMMAND_NAME_SIZE);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }

    pub fn command(&self) -> Option<Command> {
        match self.name().as_str() {
            "version" => Some(Command::Version),
            "verack" => Some(Command::VerAck),
            "getdata" => Some(Command::GetData),
            _ => None,
        }
    }
}

impl From<Command> for CommandName {
    fn from(command: Command) -> Self {
        let mut buffer = [0u8; COMMAND_NAME_SIZE];
        let bytes = command.as_str().as_bytes();
        buffer[..bytes.len()].copy_from_slice(bytes);
        Self(buffer)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, TestResult};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for Command {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            match u8::arbitrary(g) % 3 {
                0 => Self::Version,
                1 => Self::VerAck,
                2 => Self::GetData,
                _ => unreachable!(),
            }
        }
    }

    #[quickcheck]
    fn test_command_name(command: Command) -> TestResult {
        let name = CommandName::from(command);
        TestResult::from_bool(name.command() == Some(command))
    }

    #[quickcheck]
    fn test_same_as_validated(command: Command) -> bool {
        CommandName::new(command.as_str()).unwrap() == CommandName::from(command)
    }

    #[test]
    fn test_padding() {
        assert_eq!(
            CommandName::new("verack").unwrap().as_bytes(),
            b"verack\0\0\0\0\0\0"
        );
    }

    #[test]
    fn test_exactly_twelve_bytes() {
        let name = CommandName::new("sendaddrv2xx").unwrap();
        assert_eq!(name.as_bytes(), b"sendaddrv2xx");
        assert_eq!(name.name(), "sendaddrv2xx");
    }

    #[test]
    fn test_too_long() {
        assert!(matches!(
            CommandName::new("thirteenbytes"),
            Err(BTCWireError::CommandTooLong(13))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            CommandName::new(""),
            Err(BTCWireError::InvalidCommand)
        ));
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(matches!(
            CommandName::new("ver\0ack"),
            Err(BTCWireError::InvalidCommand)
        ));
        assert!(matches!(
            CommandName::new("versión"),
            Err(BTCWireError::InvalidCommand)
        ));
    }

    #[test]
    fn test_from_wire() {
        let name = CommandName::from_bytes(*b"pong\0\0\0\0\0\0\0\0");
        assert_eq!(name.name(), "pong");
        assert_eq!(name.command(), None);
    }
}
