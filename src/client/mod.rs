// periodic request client for poking at a socket server during development
// one connection, one counter, strictly request -> response -> sleep
use std::future::Future;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::sleep;

pub mod errors;
pub mod protocol;

use errors::TransportError;
use protocol::{HELLO, HOST, PERIOD, PORT_NUM, RECV_BUFFER_SIZE};

const TICK_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
pub const STARTUP_LINE: &str = "Initialize client socket";

// nothing reads these from the outside world, the binary only uses Default
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub addr: SocketAddr,
    pub period: Duration,
    pub recv_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        return ClientConfig {
            addr: SocketAddr::new(HOST, PORT_NUM),
            period: PERIOD,
            recv_buffer: RECV_BUFFER_SIZE,
        };
    }
}

// e.g. [C] 2020/01/02 03:04:05
pub fn tick_line(now: &NaiveDateTime) -> String {
    return format!("[C] {}", now.format(TICK_FORMAT));
}

pub type Console = Box<dyn Write + Send>;

pub struct ClientSocket<S> {
    stream: S,
    // number of completed request/response exchanges, also the next request id
    count: u64,
    config: ClientConfig,
    // replies land here and are never looked at
    buffer: Vec<u8>,
    console: Console,
}

impl ClientSocket<TcpStream> {
    pub async fn connect(config: ClientConfig) -> Result<Self, TransportError> {
        return ClientSocket::connect_with_console(config, Box::new(io::stdout())).await;
    }

    // no retries, a refused connect is the end of it
    pub async fn connect_with_console(
        config: ClientConfig,
        mut console: Console,
    ) -> Result<Self, TransportError> {
        writeln!(console, "{}", STARTUP_LINE)?;
        let addr = config.addr;
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|error| TransportError::Connect { addr, error })?;
        info!("connected to: {}", addr);
        return Ok(ClientSocket::with_console(stream, config, console));
    }
}

impl<S> ClientSocket<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: ClientConfig) -> Self {
        return ClientSocket::with_console(stream, config, Box::new(io::stdout()));
    }

    pub fn with_console(stream: S, config: ClientConfig, console: Console) -> Self {
        let buffer = vec![0; config.recv_buffer];
        return ClientSocket {
            stream,
            count: 0,
            config,
            buffer,
            console,
        };
    }

    pub fn count(&self) -> u64 {
        return self.count;
    }

    pub async fn handshake(&mut self) -> Result<(), TransportError> {
        let n = self.exchange(HELLO).await?;
        info!("handshake done, server replied with {} bytes", n);
        return Ok(());
    }

    // one send, one receive of at most recv_buffer bytes
    // a 0 byte receive (peer stopped writing) is just another ignored reply,
    // a dead peer shows up as an error on a later send/receive
    async fn exchange(&mut self, msg: &[u8]) -> Result<usize, TransportError> {
        self.stream.write_all(msg).await?;
        debug!("sent {:?}", String::from_utf8_lossy(msg));
        let n = self.stream.read(&mut self.buffer).await?;
        debug!("received {} bytes", n);
        return Ok(n);
    }

    pub async fn step(&mut self) -> Result<(), TransportError> {
        writeln!(self.console, "{}", tick_line(&Local::now().naive_local()))?;
        let msg = protocol::request(self.count);
        self.exchange(&msg).await?;
        self.count += 1;
        // fixed pause, time spent in the exchange is not subtracted
        sleep(self.config.period).await;
        return Ok(());
    }

    // only ever comes back with the transport failure that ended it
    pub async fn run(&mut self) -> Result<(), TransportError> {
        loop {
            if let Err(e) = self.step().await {
                warn!("stopping after {} requests: {}", self.count, e);
                return Err(e);
            }
        }
    }

    // shutdown is honored mid send, receive or sleep
    pub async fn run_until<F: Future>(&mut self, shutdown: F) -> Result<u64, TransportError> {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested after {} requests", self.count);
                    return Ok(self.count);
                }
                res = self.step() => {
                    if let Err(e) = res {
                        warn!("stopping after {} requests: {}", self.count, e);
                        return Err(e);
                    }
                }
            }
        }
    }
}
