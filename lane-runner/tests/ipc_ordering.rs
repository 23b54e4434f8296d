//! The runner is never started before the coordination socket is listening.

use std::{
    io::Write,
    net::{SocketAddr, TcpStream},
    sync::Mutex,
    time::Instant,
};

use lanebridge_runner::{LaunchRequest, Launcher, Ready, RunError, RunnerIPCCoordinator};

#[derive(Default)]
struct ProbeLauncher {
    launches: Mutex<Vec<(Instant, Instant)>>,
}

impl Launcher for ProbeLauncher {
    fn launch(&self, _: &LaunchRequest, ready: &Ready) -> Result<(), RunError> {
        let launched_at = Instant::now();
        // Fails with ECONNREFUSED if the listener is not bound yet.
        let mut stream = TcpStream::connect(ready.addr)?;
        writeln!(stream, "hello from the runner")?;
        if let Ok(mut launches) = self.launches.lock() {
            launches.push((ready.at, launched_at));
        }
        Ok(())
    }
}

#[test]
fn test_launch_never_precedes_ready() {
    let coordinator = RunnerIPCCoordinator::with_launcher(ProbeLauncher::default());
    let request = LaunchRequest::new("Runner", "test", SocketAddr::from(([127, 0, 0, 1], 0)));

    for run in 0..1000 {
        let report = coordinator.run(&request);
        assert!(report.is_success(), "run {} failed: {:?}", run, report.error);
    }

    let launches = coordinator.launcher().launches.lock().unwrap();
    assert_eq!(launches.len(), 1000);
    for (ready_at, launched_at) in launches.iter() {
        assert!(launched_at >= ready_at);
    }
}
