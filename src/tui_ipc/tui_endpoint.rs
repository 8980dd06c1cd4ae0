use std::{io, path::PathBuf, time::Duration};

use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{unix::OwnedWriteHalf, UnixStream},
    sync::{mpsc, watch},
    time::sleep,
};
use tracing::{debug, info, warn};

use super::protocol::{socket_path, Command, Message};

/// Handle for communicating with the proof engine.
pub struct TuiIpcSocketEndpoint {
    /// Receiver for incoming messages from the engine.
    pub rx: mpsc::Receiver<Message>,
    /// Sender for outgoing commands to the engine.
    pub tx: mpsc::Sender<Command>,
    /// True while the socket to the engine is open.
    pub link: watch::Receiver<bool>,
}

/// Spawn a background task that connects to the UNIX socket.
#[must_use]
pub fn spawn_socket_handler() -> TuiIpcSocketEndpoint {
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(16);
    let (link_tx, link_rx) = watch::channel(false);

    tokio::spawn(connection_loop(socket_path(), msg_tx, cmd_rx, link_tx));

    TuiIpcSocketEndpoint {
        rx: msg_rx,
        tx: cmd_tx,
        link: link_rx,
    }
}

async fn connection_loop(
    path: PathBuf,
    msg_tx: mpsc::Sender<Message>,
    mut cmd_rx: mpsc::Receiver<Command>,
    link_tx: watch::Sender<bool>,
) {
    loop {
        match UnixStream::connect(&path).await {
            Ok(stream) => {
                info!(path = %path.display(), "connected to proof engine");
                link_tx.send_replace(true);
                let result = handle_connection(stream, &msg_tx, &mut cmd_rx).await;
                link_tx.send_replace(false);
                if result.is_err() {
                    return;
                }
                info!("proof engine disconnected");
            }
            Err(_) => {
                // Retry connection after delay
                sleep(Duration::from_secs(1)).await;
            }
        }
    }
}

/// Returns `Err` once the panel side has gone away.
async fn handle_connection(
    stream: UnixStream,
    msg_tx: &mpsc::Sender<Message>,
    cmd_rx: &mut mpsc::Receiver<Command>,
) -> Result<(), ()> {
    let (reader, mut writer) = stream.into_split();
    let reader = BufReader::new(reader);
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line_result = lines.next_line() => {
                if !handle_incoming_line(line_result, msg_tx).await? {
                    return Ok(());
                }
            }
            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else {
                    return Err(());
                };
                if send_command(&mut writer, &cmd).await.is_err() {
                    return Ok(());
                }
            }
        }
    }
}

async fn handle_incoming_line(
    line_result: Result<Option<String>, io::Error>,
    msg_tx: &mpsc::Sender<Message>,
) -> Result<bool, ()> {
    match line_result {
        Ok(Some(line)) => {
            match serde_json::from_str::<Message>(&line) {
                Ok(msg) => {
                    if msg_tx.send(msg).await.is_err() {
                        return Err(()); // TUI closed, exit task
                    }
                }
                Err(e) => warn!(error = %e, "skipping malformed engine message"),
            }
            Ok(true)
        }
        Ok(None) | Err(_) => Ok(false), // Connection closed, reconnect
    }
}

async fn send_command(writer: &mut OwnedWriteHalf, cmd: &Command) -> io::Result<()> {
    let Ok(json) = serde_json::to_string(cmd) else {
        return Ok(()); // Skip invalid command, don't break connection
    };
    debug!(%json, "sending command");
    let line = format!("{json}\n");
    writer.write_all(line.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use tokio::{net::UnixListener, time::timeout};

    use super::*;
    use crate::panel::{Severity, ToolbarButton};

    #[tokio::test]
    async fn test_connection_relays_messages_and_commands() {
        let path = std::env::temp_dir().join(format!("proof-panel-test-{}.sock", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let listener = UnixListener::bind(&path).unwrap();

        let (msg_tx, mut msg_rx) = mpsc::channel(4);
        let (cmd_tx, mut cmd_rx) = mpsc::channel(4);

        let client_path = path.clone();
        let client = tokio::spawn(async move {
            let stream = UnixStream::connect(&client_path).await.unwrap();
            handle_connection(stream, &msg_tx, &mut cmd_rx).await
        });

        let (engine, _) = listener.accept().await.unwrap();
        let (engine_reader, mut engine_writer) = engine.into_split();
        engine_writer
            .write_all(b"not json\n{\"type\":\"Log\",\"text\":\"hi\",\"level\":\"Info\"}\n")
            .await
            .unwrap();

        let msg = msg_rx.recv().await.unwrap();
        assert_eq!(
            msg,
            Message::Log {
                text: "hi".to_string(),
                level: Severity::Info,
                sid: None,
            }
        );

        cmd_tx
            .send(Command::Action {
                button: ToolbarButton::Down,
            })
            .await
            .unwrap();
        let mut engine_lines = BufReader::new(engine_reader).lines();
        let line = engine_lines.next_line().await.unwrap().unwrap();
        assert_eq!(line, r#"{"type":"Action","button":"down"}"#);

        drop(engine_writer);
        drop(engine_lines);
        assert_eq!(client.await.unwrap(), Ok(()));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_link_state_follows_connection() {
        let path = std::env::temp_dir().join(format!("proof-panel-link-{}.sock", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let listener = UnixListener::bind(&path).unwrap();

        let (msg_tx, _msg_rx) = mpsc::channel(4);
        let (_cmd_tx, cmd_rx) = mpsc::channel(4);
        let (link_tx, mut link_rx) = watch::channel(false);
        tokio::spawn(connection_loop(path.clone(), msg_tx, cmd_rx, link_tx));

        let (engine, _) = listener.accept().await.unwrap();
        timeout(Duration::from_secs(5), link_rx.wait_for(|up| *up))
            .await
            .unwrap()
            .unwrap();

        // No engine to reconnect to once the socket file is gone.
        drop(listener);
        let _ = std::fs::remove_file(&path);
        drop(engine);
        timeout(Duration::from_secs(5), link_rx.wait_for(|up| !*up))
            .await
            .unwrap()
            .unwrap();
    }
}
