//! Process exit and signal cleanup.
//!
//! Whatever path the process leaves by, the terminal must come back in
//! cooked mode and the RNG pool and mixer state must be scrubbed.

use crate::rand;

/// Put the tty back into canonical echoing mode via termios directly,
/// independent of crossterm's raw-mode bookkeeping.
pub fn reset_terminal() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

// atexit hook: restore the terminal, then scrub RNG state.
extern "C" fn cleanup_on_exit() {
    reset_terminal();
    unsafe {
        // Color/cursor restore only makes sense on a real terminal,
        // not when stdout is piped
        if libc::isatty(1) == 1 {
            const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
    rand::zeroize_state();
}

// SIGINT/SIGTERM/SIGHUP: plain exit, the atexit hook does the cleanup.
extern "C" fn on_signal(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

// SIGSEGV/SIGABRT: scrub RNG state, then re-raise with the default action.
extern "C" fn on_crash(sig: libc::c_int) {
    rand::zeroize_state();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

fn hook(sig: libc::c_int, handler: extern "C" fn(libc::c_int)) {
    unsafe {
        libc::signal(sig, handler as *const () as libc::sighandler_t);
    }
}

/// Register the atexit hook and signal handlers. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
    }
    hook(libc::SIGINT, on_signal);
    hook(libc::SIGTERM, on_signal);
    hook(libc::SIGHUP, on_signal);
    hook(libc::SIGSEGV, on_crash);
    hook(libc::SIGABRT, on_crash);
}
