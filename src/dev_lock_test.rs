use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("softwared-lock-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn acquire_writes_pid_and_drop_removes() {
    let path = scratch("basic").join("nested").join("dev.lock");
    let lock = DevLock::acquire(&path, false).unwrap();
    assert_eq!(lock.path(), path);
    let pid = fs::read_to_string(&path).unwrap();
    assert_eq!(pid.trim(), std::process::id().to_string());

    drop(lock);
    assert!(!path.exists());
}

#[test]
fn second_acquire_fails_while_held() {
    let path = scratch("held").join("dev.lock");
    let _held = DevLock::acquire(&path, false).unwrap();

    let err = DevLock::acquire(&path, false).unwrap_err();
    match err {
        AppError::DevLockHeld { path: reported, pid } => {
            assert_eq!(reported, path);
            assert_eq!(pid, std::process::id().to_string());
        }
        other => panic!("expected DevLockHeld, got {other:?}"),
    }
    assert!(path.exists(), "failed acquire must not remove the holder's lock");
}

#[test]
fn stale_lock_blocks_without_clean() {
    let dir = scratch("stale");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("dev.lock");
    fs::write(&path, "4242\n").unwrap();

    let err = DevLock::acquire(&path, false).unwrap_err();
    assert!(err.to_string().contains("held by pid 4242"), "{err}");
}

#[test]
fn clean_removes_stale_lock() {
    let dir = scratch("clean");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("dev.lock");
    fs::write(&path, "4242\n").unwrap();

    let lock = DevLock::acquire(&path, true).unwrap();
    let pid = fs::read_to_string(&path).unwrap();
    assert_eq!(pid.trim(), std::process::id().to_string());
    drop(lock);
}

#[test]
fn clean_without_existing_lock_is_fine() {
    let path = scratch("clean-missing").join("dev.lock");
    let lock = DevLock::acquire(&path, true).unwrap();
    assert!(path.exists());
    drop(lock);
    assert!(!path.exists());
}

#[test]
fn lock_can_be_retaken_after_release() {
    let path = scratch("retake").join("dev.lock");
    drop(DevLock::acquire(&path, false).unwrap());
    drop(DevLock::acquire(&path, false).unwrap());
    assert!(!path.exists());
}
