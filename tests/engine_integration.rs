//! Black-box tests over the public crate surface: assemble a realistic
//! catalogue, wire it to fixed probes, and drive it through
//! `engine::run_for_transport` the way the demo binary does.

use bootcheck::checks::{
    ClientVmCheck, FdLimitCheck, G1GcVersionCheck, HeapSizeCheck, MaxAddressSpaceCheck,
    MaxMapCountCheck, MaxThreadsCheck, MemoryLockCheck, OnErrorForkRiskCheck,
    OnOutOfMemoryErrorForkRiskCheck, SerialGcCheck, SyscallFilterCheck,
};
use bootcheck::probes::host::FixedHost;
use bootcheck::probes::process::FixedProcessProbe;
use bootcheck::probes::runtime::FixedRuntimeProbe;
use bootcheck::probes::{HostDescriptor, ProcessProbe, RuntimeProbe};
use bootcheck::{engine, BoundTransport, Check, EnforcementMode, Logger};
use std::cell::RefCell;
use std::net::SocketAddr;
use std::rc::Rc;

#[derive(Default)]
struct CollectingLogger {
    messages: RefCell<Vec<String>>,
}

impl Logger for CollectingLogger {
    fn info(&self, msg: &str) {
        self.messages.borrow_mut().push(msg.to_string());
    }
}

fn addr(s: &str) -> SocketAddr {
    s.parse().unwrap()
}

fn full_catalogue(
    process: Rc<dyn ProcessProbe>,
    runtime: Rc<dyn RuntimeProbe>,
    host: Rc<dyn HostDescriptor>,
    fd_limit: i64,
    mlockall_requested: bool,
    syscall_filter_requested: bool,
) -> Vec<Box<dyn Check>> {
    vec![
        Box::new(HeapSizeCheck::new(runtime.clone())),
        Box::new(FdLimitCheck::new(process.clone(), fd_limit).unwrap()),
        Box::new(MemoryLockCheck::new(process.clone(), mlockall_requested)),
        Box::new(MaxThreadsCheck::new(process.clone())),
        Box::new(MaxAddressSpaceCheck::new(process.clone(), host.clone())),
        Box::new(MaxMapCountCheck::new(process.clone())),
        Box::new(ClientVmCheck::new(runtime.clone())),
        Box::new(SerialGcCheck::new(runtime.clone())),
        Box::new(SyscallFilterCheck::new(
            process.clone(),
            syscall_filter_requested,
        )),
        Box::new(OnErrorForkRiskCheck::new(process.clone(), runtime.clone())),
        Box::new(OnOutOfMemoryErrorForkRiskCheck::new(process, runtime.clone())),
        Box::new(G1GcVersionCheck::new(runtime)),
    ]
}

#[test]
fn healthy_host_passes_in_production_with_exactly_one_log_line() {
    let process: Rc<dyn ProcessProbe> = Rc::new(FixedProcessProbe {
        max_fd_count: 65_536,
        is_memory_locked: false,
        max_threads: 4_096,
        max_address_space: -1,
        max_map_count: 262_144,
        is_syscall_filter_installed: false,
    });
    let runtime: Rc<dyn RuntimeProbe> = Rc::new(FixedRuntimeProbe::default());
    let host: Rc<dyn HostDescriptor> = Rc::new(FixedHost { macos: false });

    let checks = full_catalogue(process, runtime, host, 65_536, false, false);
    let transport = BoundTransport::new(vec![addr("0.0.0.0:9200")], addr("10.0.0.5:9200"));
    let logger = CollectingLogger::default();

    let result = engine::run_for_transport(&transport, &checks, "integration", &logger);
    assert!(result.is_ok());
    assert_eq!(logger.messages.borrow().len(), 1);
}

#[test]
fn loopback_only_host_is_development_and_silent() {
    let process: Rc<dyn ProcessProbe> = Rc::new(FixedProcessProbe {
        max_fd_count: 1_024, // below every floor, but inert in development
        ..Default::default()
    });
    let runtime: Rc<dyn RuntimeProbe> = Rc::new(FixedRuntimeProbe::default());
    let host: Rc<dyn HostDescriptor> = Rc::new(FixedHost { macos: false });

    let checks = full_catalogue(process, runtime, host, 65_536, false, false);
    let transport = BoundTransport::new(vec![addr("127.0.0.1:9200")], addr("127.0.0.1:9200"));
    let logger = CollectingLogger::default();

    let result = engine::run_for_transport(&transport, &checks, "integration", &logger);
    assert!(result.is_ok());
    assert!(logger.messages.borrow().is_empty());
}

#[test]
fn production_host_below_fd_floor_reports_a_single_aggregated_failure() {
    let process: Rc<dyn ProcessProbe> = Rc::new(FixedProcessProbe {
        max_fd_count: 1_024,
        max_threads: 4_096,
        max_address_space: -1,
        max_map_count: 262_144,
        ..Default::default()
    });
    let runtime: Rc<dyn RuntimeProbe> = Rc::new(FixedRuntimeProbe::default());
    let host: Rc<dyn HostDescriptor> = Rc::new(FixedHost { macos: false });

    let checks = full_catalogue(process, runtime, host, 65_536, false, false);
    let transport = BoundTransport::new(vec![addr("0.0.0.0:9200")], addr("0.0.0.0:9200"));
    let logger = CollectingLogger::default();

    let err = engine::run_for_transport(&transport, &checks, "integration", &logger).unwrap_err();
    assert_eq!(err.causes().len(), 1);
    assert!(err.causes()[0].contains("max file descriptors"));
}

#[test]
fn fork_risk_checks_are_always_enforced_even_in_development() {
    let process: Rc<dyn ProcessProbe> = Rc::new(FixedProcessProbe {
        is_syscall_filter_installed: true,
        ..Default::default()
    });
    let runtime: Rc<dyn RuntimeProbe> = Rc::new(FixedRuntimeProbe {
        on_error_directive: Some("kill -9 %p".to_string()),
        ..Default::default()
    });
    let host: Rc<dyn HostDescriptor> = Rc::new(FixedHost { macos: false });

    let checks = full_catalogue(process, runtime, host, 65_536, false, false);
    let development_transport =
        BoundTransport::new(vec![addr("127.0.0.1:9200")], addr("127.0.0.1:9200"));
    let logger = CollectingLogger::default();

    let err = engine::run_for_transport(&development_transport, &checks, "integration", &logger)
        .unwrap_err();
    assert!(err.causes().iter().any(|c| c.contains("OnError")));
}

#[test]
fn direct_run_with_explicit_mode_matches_transport_resolved_mode() {
    let process: Rc<dyn ProcessProbe> = Rc::new(FixedProcessProbe {
        max_fd_count: 65_536,
        max_threads: 4_096,
        max_address_space: -1,
        max_map_count: 262_144,
        ..Default::default()
    });
    let runtime: Rc<dyn RuntimeProbe> = Rc::new(FixedRuntimeProbe::default());
    let host: Rc<dyn HostDescriptor> = Rc::new(FixedHost { macos: false });

    let checks = full_catalogue(process, runtime, host, 65_536, false, false);
    assert!(engine::run(EnforcementMode::Production, &checks, "integration").is_ok());
    assert!(engine::run(EnforcementMode::Development, &checks, "integration").is_ok());
}
