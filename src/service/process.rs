use std::io;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;

use crate::error::{ConvertError, Result};
use crate::models::conversion::{Invocation, ProcessOutcome};
use crate::service::traits::i_service::ProcessRunner;

/// 以 tokio 子行程執行 pdftocairo
///
/// 執行流程為明確的狀態機：
/// `Spawning -> WritingInput（僅記憶體輸入）-> AwaitingExit -> Succeeded | Failed`。
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, invocation: Invocation) -> Result<ProcessOutcome> {
        let mut state = RunState::Spawning(invocation);
        loop {
            state = match state {
                RunState::Succeeded(outcome) => return Ok(outcome),
                RunState::Failed(err) => return Err(err),
                pending => pending.step().await,
            };
        }
    }
}

enum RunState {
    Spawning(Invocation),
    WritingInput {
        child: Child,
        input: Vec<u8>,
        timeout: Option<Duration>,
    },
    AwaitingExit {
        child: Child,
        writer: Option<JoinHandle<io::Result<()>>>,
        timeout: Option<Duration>,
    },
    Succeeded(ProcessOutcome),
    Failed(ConvertError),
}

impl RunState {
    fn name(&self) -> &'static str {
        match self {
            RunState::Spawning(_) => "spawning",
            RunState::WritingInput { .. } => "writing-input",
            RunState::AwaitingExit { .. } => "awaiting-exit",
            RunState::Succeeded(_) => "success",
            RunState::Failed(_) => "failed",
        }
    }

    async fn step(self) -> RunState {
        let from = self.name();
        let next = match self {
            RunState::Spawning(invocation) => spawn(invocation),
            RunState::WritingInput {
                child,
                input,
                timeout,
            } => write_input(child, input, timeout),
            RunState::AwaitingExit {
                child,
                writer,
                timeout,
            } => await_exit(child, writer, timeout).await,
            terminal => terminal,
        };
        debug!("子行程狀態：{} -> {}", from, next.name());
        next
    }
}

fn spawn(invocation: Invocation) -> RunState {
    let Invocation {
        bin,
        args,
        stdin,
        timeout,
    } = invocation;

    debug!("執行：{} {:?}", bin.display(), args);
    let mut command = Command::new(&bin);
    command
        .args(&args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match command.spawn() {
        Err(source) => RunState::Failed(ConvertError::Spawn {
            bin: bin.display().to_string(),
            source,
        }),
        Ok(child) => match stdin {
            Some(input) => RunState::WritingInput {
                child,
                input,
                timeout,
            },
            None => RunState::AwaitingExit {
                child,
                writer: None,
                timeout,
            },
        },
    }
}

// stdin 由獨立任務寫入，同時在 AwaitingExit 讀取 stdout/stderr，避免管線互相阻塞
fn write_input(mut child: Child, input: Vec<u8>, timeout: Option<Duration>) -> RunState {
    let writer = child.stdin.take().map(|mut pipe| {
        tokio::spawn(async move {
            pipe.write_all(&input).await?;
            pipe.shutdown().await
        })
    });
    RunState::AwaitingExit {
        child,
        writer,
        timeout,
    }
}

async fn await_exit(
    child: Child,
    writer: Option<JoinHandle<io::Result<()>>>,
    timeout: Option<Duration>,
) -> RunState {
    let waited = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(waited) => waited,
            Err(_) => {
                if let Some(writer) = &writer {
                    writer.abort();
                }
                return RunState::Failed(ConvertError::Timeout(limit));
            }
        },
        None => child.wait_with_output().await,
    };
    let output = match waited {
        Ok(output) => output,
        Err(e) => return RunState::Failed(ConvertError::Io(e)),
    };

    if let Some(writer) = writer {
        match writer.await {
            Ok(Ok(())) => {}
            // 子行程提早結束時寫入會失敗，交由結束碼判定
            Ok(Err(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("子行程提早關閉標準輸入：{}", e);
            }
            Ok(Err(e)) => warn!("寫入子行程標準輸入失敗：{}", e),
            Err(e) => return RunState::Failed(ConvertError::Io(io::Error::other(e))),
        }
    }

    let outcome = ProcessOutcome::from_output(output.status.code(), &output.stderr);
    match outcome.into_result() {
        Ok(outcome) => RunState::Succeeded(outcome),
        Err(e) => RunState::Failed(e),
    }
}
