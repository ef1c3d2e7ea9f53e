use uetraces_config::SINGLE_INSTANCE_LOCK_NAME;
use uetraces_infra::instance::{acquire, acquire_default, InstanceLock};

fn unique_name(tag: &str) -> String {
    format!("UETracesRecorder.Test.{tag}.{}", std::process::id())
}

#[test]
fn second_acquire_reports_already_running_while_first_is_held() {
    let name = unique_name("held");

    let first = acquire(&name).expect("first acquire");
    assert!(matches!(first, InstanceLock::Acquired(_)));

    let second = acquire(&name).expect("second acquire");
    assert!(matches!(second, InstanceLock::AlreadyRunning));

    // The first holder is untouched by the failed attempt.
    match first {
        InstanceLock::Acquired(guard) => assert!(guard.name().contains(&name)),
        InstanceLock::AlreadyRunning => unreachable!(),
    }
}

#[test]
fn lock_is_released_on_drop() {
    let name = unique_name("released");

    let first = acquire(&name).expect("first acquire");
    assert!(matches!(first, InstanceLock::Acquired(_)));
    drop(first);

    let again = acquire(&name).expect("acquire after release");
    assert!(matches!(again, InstanceLock::Acquired(_)));
}

#[test]
fn default_lock_uses_the_launcher_lock_name() {
    let first = acquire_default().expect("first acquire");
    let InstanceLock::Acquired(guard) = first else {
        panic!("launcher lock already held by a running instance");
    };
    assert!(guard.name().ends_with(SINGLE_INSTANCE_LOCK_NAME));

    let second = acquire(SINGLE_INSTANCE_LOCK_NAME).expect("second acquire");
    assert!(matches!(second, InstanceLock::AlreadyRunning));
}
