use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::termios::{self, LocalFlags, SetArg, Termios};
use std::os::unix::io::RawFd;
use std::sync::OnceLock;

const STDIN_FD: RawFd = 0;

static ORIGINAL_TERMIOS: OnceLock<Termios> = OnceLock::new();

/// Puts stdin into non-canonical, no-echo mode for the lifetime of the
/// value, and restores the original mode on drop. A SIGINT handler does the
/// same restoration before exiting, since a guest-interrupted run otherwise
/// never reaches the `Drop` impl.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> nix::Result<Self> {
        let original = termios::tcgetattr(STDIN_FD)?;
        let _ = ORIGINAL_TERMIOS.set(original.clone());

        let mut raw = original;
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        termios::tcsetattr(STDIN_FD, SetArg::TCSANOW, &raw)?;

        unsafe {
            let action = SigAction::new(
                SigHandler::Handler(handle_sigint),
                SaFlags::empty(),
                SigSet::empty(),
            );
            signal::sigaction(Signal::SIGINT, &action)?;
        }

        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore();
    }
}

extern "C" fn handle_sigint(_signal: libc::c_int) {
    restore();
    println!();
    std::process::exit(130);
}

fn restore() {
    if let Some(original) = ORIGINAL_TERMIOS.get() {
        let _ = termios::tcsetattr(STDIN_FD, SetArg::TCSANOW, original);
    }
}
