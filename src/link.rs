// Point-to-point command link: one text line per control cycle
//
// The controller connects, the drive unit binds and accepts a single
// peer. Fire and forget: no acknowledgements, no retries. Link loss is
// fatal on both ends.

use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::info;

use crate::messages::WheelSpeeds;

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("link I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("peer closed the link")]
    Closed,
}

/// Controller side: sends one wheel-speed line per cycle
pub struct CommandSender {
    stream: TcpStream,
}

impl CommandSender {
    pub async fn connect(addr: &str) -> Result<Self, LinkError> {
        let stream = TcpStream::connect(addr).await?;
        stream.set_nodelay(true)?;
        info!("Connected to drive unit at {}", addr);
        Ok(Self { stream })
    }

    /// Best-effort send; an error here means the link is gone.
    pub async fn send(&mut self, speeds: &WheelSpeeds) -> Result<(), LinkError> {
        let mut line = speeds.encode();
        line.push('\n');
        self.stream.write_all(line.as_bytes()).await?;
        Ok(())
    }
}

/// Drive-unit side: accepts the controller and yields incoming lines
pub struct CommandListener {
    listener: TcpListener,
}

impl CommandListener {
    pub async fn bind(addr: &str) -> Result<Self, LinkError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, LinkError> {
        Ok(self.listener.local_addr()?)
    }

    /// Wait for the controller to connect
    pub async fn accept(&self) -> Result<CommandReceiver, LinkError> {
        let (stream, peer) = self.listener.accept().await?;
        info!("Controller connected from {}", peer);
        Ok(CommandReceiver {
            reader: BufReader::new(stream),
            line: String::new(),
        })
    }
}

pub struct CommandReceiver {
    reader: BufReader<TcpStream>,
    line: String,
}

impl CommandReceiver {
    /// Next raw line from the controller. Blocks with no timeout; a
    /// silent controller stalls the drive unit, which is accepted for
    /// this tight point-to-point link.
    pub async fn recv(&mut self) -> Result<&str, LinkError> {
        self.line.clear();
        let n = self.reader.read_line(&mut self.line).await?;
        if n == 0 {
            return Err(LinkError::Closed);
        }
        Ok(self.line.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_and_receive_one_line() {
        let listener = CommandListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let sender = tokio::spawn(async move {
            let mut sender = CommandSender::connect(&addr).await.unwrap();
            sender.send(&WheelSpeeds::new(-866, 866, 0)).await.unwrap();
        });

        let mut receiver = listener.accept().await.unwrap();
        let line = receiver.recv().await.unwrap();
        assert_eq!(WheelSpeeds::decode(line).unwrap(), WheelSpeeds::new(-866, 866, 0));

        sender.await.unwrap();
    }

    #[tokio::test]
    async fn test_peer_disconnect_is_reported() {
        let listener = CommandListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        let sender = tokio::spawn(async move {
            // Connect and drop immediately
            let _ = CommandSender::connect(&addr).await.unwrap();
        });

        let mut receiver = listener.accept().await.unwrap();
        sender.await.unwrap();
        assert!(matches!(receiver.recv().await, Err(LinkError::Closed)));
    }
}
