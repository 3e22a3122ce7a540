use std::error::Error;
use std::net::SocketAddr;
use std::{fmt, io};

// every variant is a transport failure, none of them are recoverable
// the split only exists so the process exits with a readable message
#[derive(Debug)]
pub enum TransportError {
    Connect { addr: SocketAddr, error: io::Error },
    IOError { error: io::Error },
}

impl TransportError {
    fn new(error: io::Error) -> TransportError {
        TransportError::IOError { error }
    }
}

impl From<io::Error> for TransportError {
    fn from(error: io::Error) -> Self {
        TransportError::new(error)
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportError::Connect { addr, error } => {
                write!(f, "Could not connect to {}: {}", addr, error)
            }
            TransportError::IOError { error } => write!(f, "IO Error: {}", error),
        }
    }
}

impl Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: TransportError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, TransportError::IOError { .. }));
        assert!(err.to_string().starts_with("IO Error:"));
    }

    #[test]
    fn connect_error_names_address() {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        let err = TransportError::Connect {
            addr,
            error: io::Error::from(io::ErrorKind::ConnectionRefused),
        };
        assert!(err.to_string().contains("127.0.0.1:12345"));
    }
}
