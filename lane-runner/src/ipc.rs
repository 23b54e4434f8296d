//! Running a lane: a coordination listener and the runner process, side by side.
//!
//! The listener binds the coordination socket, announces readiness on a
//! one-shot channel, then forwards every line it receives to a [`LineSink`]. The
//! launcher waits for that announcement before spawning the runner, so the
//! runner can always connect. When the runner exits the launcher marks the
//! run finished and wakes the listener, which then returns.

use std::{
    io::{BufRead, BufReader},
    net::{SocketAddr, TcpListener, TcpStream},
    path::{Path, PathBuf},
    process::{Command, Stdio},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{Receiver, SyncSender, sync_channel},
    },
    thread,
    time::{Duration, Instant},
};

use crate::RunError;

/// Everything needed to start the runner for one lane.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub artifact: PathBuf,
    pub lane: String,
    pub params: Vec<(String, String)>,
    pub socket: SocketAddr,
    pub working_dir: Option<PathBuf>,
}

impl LaunchRequest {
    pub fn new(artifact: impl Into<PathBuf>, lane: impl Into<String>, socket: SocketAddr) -> Self {
        Self {
            artifact: artifact.into(),
            lane: lane.into(),
            params: Vec::new(),
            socket,
            working_dir: None,
        }
    }

    pub fn params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// `lane <name> <key> <value> ...`
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["lane".to_string(), self.lane.clone()];
        for (key, value) in &self.params {
            args.push(key.clone());
            args.push(value.clone());
        }
        args
    }
}

/// The listener's readiness announcement.
#[derive(Debug, Clone, Copy)]
pub struct Ready {
    /// Address actually bound (differs from the request when port 0 was asked for).
    pub addr: SocketAddr,
    pub at: Instant,
}

/// Starts the runner and waits for it to exit.
pub trait Launcher: Sync {
    fn launch(&self, request: &LaunchRequest, ready: &Ready) -> Result<(), RunError>;
}

/// Spawns the compiled runner as a child process, discarding its stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, request: &LaunchRequest, ready: &Ready) -> Result<(), RunError> {
        tracing::debug!(
            artifact = %request.artifact.display(),
            socket = %ready.addr,
            "starting runner"
        );

        let mut command = Command::new(&request.artifact);
        command.args(request.args()).stdout(Stdio::null());
        if let Some(dir) = &request.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|source| RunError::Spawn {
            program: request.artifact.clone(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(RunError::RunnerExited {
                code: status.code(),
            })
        }
    }
}

/// Outcome of one lane run.
#[derive(Debug)]
pub struct RunReport {
    pub lane: String,
    pub artifact: PathBuf,
    pub elapsed: Duration,
    /// `elapsed` rounded to whole minutes.
    pub elapsed_minutes: u64,
    pub error: Option<RunError>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Called once at the end of every run, whether it succeeded or not.
pub trait FinishHook {
    fn finished(&self, report: &RunReport);
}

/// Logs a one-line summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFinishHook;

impl FinishHook for LogFinishHook {
    fn finished(&self, report: &RunReport) {
        let outcome = if report.is_success() { "finished" } else { "failed" };
        tracing::info!(
            lane = %report.lane,
            minutes = report.elapsed_minutes,
            "lane {}",
            outcome
        );
    }
}

/// Receives each line the runner sends over the coordination socket.
pub trait LineSink: Send + Sync {
    fn line(&self, line: &str);
}

/// Logs runner lines under the `runner` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLines;

impl LineSink for LogLines {
    fn line(&self, line: &str) {
        tracing::info!(target: "runner", "{}", line);
    }
}

/// Runs lanes through the coordination channel.
pub struct RunnerIPCCoordinator<L = ProcessLauncher> {
    launcher: L,
    hook: Box<dyn FinishHook>,
    sink: Box<dyn LineSink>,
}

impl RunnerIPCCoordinator<ProcessLauncher> {
    pub fn new() -> Self {
        Self::with_launcher(ProcessLauncher)
    }
}

impl Default for RunnerIPCCoordinator<ProcessLauncher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Launcher> RunnerIPCCoordinator<L> {
    pub fn with_launcher(launcher: L) -> Self {
        Self {
            launcher,
            hook: Box::new(LogFinishHook),
            sink: Box::new(LogLines),
        }
    }

    pub fn with_hook(mut self, hook: impl FinishHook + 'static) -> Self {
        self.hook = Box::new(hook);
        self
    }

    pub fn with_sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Run a lane; always returns a report and always calls the finish hook.
    pub fn run(&self, request: &LaunchRequest) -> RunReport {
        let started = Instant::now();
        let finished = AtomicBool::new(false);
        let (ready_tx, ready_rx) = sync_channel::<Ready>(1);

        let (launched, listened) = thread::scope(|scope| {
            let finished = &finished;
            let launcher = &self.launcher;
            let sink = &*self.sink;
            let listener = scope.spawn(move || listen(request.socket, ready_tx, finished, sink));
            let launcher =
                scope.spawn(move || launch_when_ready(launcher, request, ready_rx, finished));
            (launcher.join(), listener.join())
        });

        let launched = launched.unwrap_or(Err(RunError::UnitPanicked { unit: "launcher" }));
        let listened = listened.unwrap_or(Err(RunError::UnitPanicked { unit: "listener" }));
        let error = first_error(launched, listened);

        if let Some(error) = &error {
            tracing::warn!(
                lane = %request.lane,
                params = ?request.params,
                artifact = %request.artifact.display(),
                "lane context at failure"
            );
            tracing::error!("{}", error);
        }

        let elapsed = started.elapsed();
        let report = RunReport {
            lane: request.lane.clone(),
            artifact: request.artifact.clone(),
            elapsed,
            elapsed_minutes: (elapsed.as_secs_f64() / 60.0).round() as u64,
            error,
        };
        self.hook.finished(&report);
        report
    }
}

fn launch_when_ready<L: Launcher>(
    launcher: &L,
    request: &LaunchRequest,
    ready_rx: Receiver<Ready>,
    finished: &AtomicBool,
) -> Result<(), RunError> {
    let ready = ready_rx.recv().map_err(|_| RunError::ListenerUnavailable)?;
    let _wake = WakeListener {
        addr: ready.addr,
        finished,
    };
    launcher.launch(request, &ready)
}

/// Marks the run finished and unblocks the listener's `accept`, also on panic.
struct WakeListener<'a> {
    addr: SocketAddr,
    finished: &'a AtomicBool,
}

impl Drop for WakeListener<'_> {
    fn drop(&mut self) {
        self.finished.store(true, Ordering::SeqCst);
        if let Err(e) = TcpStream::connect(self.addr) {
            tracing::debug!(error = %e, "listener already closed");
        }
    }
}

fn listen(
    addr: SocketAddr,
    ready: SyncSender<Ready>,
    finished: &AtomicBool,
    sink: &dyn LineSink,
) -> Result<(), RunError> {
    let listener =
        TcpListener::bind(addr).map_err(|source| RunError::ListenerBind { addr, source })?;
    let bound = listener.local_addr()?;

    tracing::debug!(addr = %bound, "coordination socket ready");
    if ready
        .send(Ready {
            addr: bound,
            at: Instant::now(),
        })
        .is_err()
    {
        return Ok(());
    }
    drop(ready);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => forward_lines(stream, sink),
            Err(e) => tracing::debug!(error = %e, "failed to accept connection"),
        }
        if finished.load(Ordering::SeqCst) {
            break;
        }
    }
    Ok(())
}

fn forward_lines(stream: TcpStream, sink: &dyn LineSink) {
    for line in BufReader::new(stream).lines() {
        match line {
            Ok(line) => sink.line(&line),
            Err(e) => {
                tracing::debug!(error = %e, "runner connection closed");
                break;
            }
        }
    }
}

/// Launcher error first, unless it only echoes a listener failure.
fn first_error(
    launched: Result<(), RunError>,
    listened: Result<(), RunError>,
) -> Option<RunError> {
    match (launched, listened) {
        (Err(RunError::ListenerUnavailable), Err(listener)) => Some(listener),
        (Err(launcher), _) => Some(launcher),
        (Ok(()), Err(listener)) => Some(listener),
        (Ok(()), Ok(())) => None,
    }
}

/// Run `<artifact> lanes` and return its stdout.
pub fn list_lanes(artifact: &Path, working_dir: Option<&Path>) -> Result<String, RunError> {
    let mut command = Command::new(artifact);
    command.arg("lanes");
    if let Some(dir) = working_dir {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|source| RunError::Spawn {
        program: artifact.to_path_buf(),
        source,
    })?;
    if !output.status.success() {
        return Err(RunError::RunnerExited {
            code: output.status.code(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
