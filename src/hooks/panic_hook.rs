use std::{
    backtrace::{Backtrace, BacktraceStatus},
    cell::Cell,
    panic::PanicHookInfo,
    sync::{Once, OnceLock},
};

use crate::Failure;

thread_local! {
    static BOUNDARY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

static INSTALL: Once = Once::new();

#[derive(Debug)]
struct MustEnvOptions {
    panic_hook: bool,
}

impl MustEnvOptions {
    fn get() -> &'static Self {
        static MUST_FLAGS: OnceLock<MustEnvOptions> = OnceLock::new();

        MUST_FLAGS.get_or_init(|| match std::env::var_os("MUST_PANIC_HOOK") {
            Some(var) => Self::parse(&var.to_string_lossy()),
            None => MustEnvOptions { panic_hook: true },
        })
    }

    fn parse(var: &str) -> Self {
        let var = var.trim();
        let disabled = var.eq_ignore_ascii_case("off")
            || var.eq_ignore_ascii_case("false")
            || var == "0";

        MustEnvOptions {
            panic_hook: !disabled,
        }
    }
}

/// Marks the current thread as being inside a recovery boundary for as long
/// as the guard lives.
pub(crate) struct BoundaryGuard(());

impl BoundaryGuard {
    pub(crate) fn enter() -> Self {
        BOUNDARY_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self(())
    }
}

impl Drop for BoundaryGuard {
    fn drop(&mut self) {
        BOUNDARY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn inside_boundary() -> bool {
    BOUNDARY_DEPTH
        .try_with(|depth| depth.get() > 0)
        .unwrap_or(false)
}

/// Wraps the current panic hook so that failures render in their fixed
/// format.
///
/// Installation happens at most once per process; later calls do nothing.
/// It is also performed automatically on the first raise unless the
/// `MUST_PANIC_HOOK` environment variable is `off`, `false` or `0`.
///
/// The wrapper delegates every panic whose payload is not a
/// [`Failure`] to the hook that was installed before it.
pub fn install_panic_hook() {
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            match info.payload().downcast_ref::<Failure>() {
                Some(_) if inside_boundary() => {}
                Some(failure) => report_uncaught(failure),
                None => previous(info),
            }
        }));
    });
}

pub(crate) fn install_if_enabled() {
    // `set_hook` panics when called during unwinding.
    if MustEnvOptions::get().panic_hook && !std::thread::panicking() {
        install_panic_hook();
    }
}

fn report_uncaught(failure: &Failure) {
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    eprintln!("{}", render_uncaught(failure, name));

    // Honors RUST_BACKTRACE / RUST_LIB_BACKTRACE like the default hook.
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => eprintln!("stack backtrace:\n{backtrace}"),
        BacktraceStatus::Disabled => eprintln!(
            "note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace"
        ),
        _ => {}
    }
}

fn render_uncaught(failure: &Failure, thread_name: &str) -> String {
    let location = failure.location();
    format!(
        "thread '{thread_name}' panicked at {}:{}:{}:\n{failure}",
        location.file, location.line, location.column
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    #[test]
    fn test_env_option_parsing() {
        for var in ["off", "OFF", "false", "False", "0", " off "] {
            assert!(!MustEnvOptions::parse(var).panic_hook, "{var:?}");
        }
        for var in ["on", "1", "true", ""] {
            assert!(MustEnvOptions::parse(var).panic_hook, "{var:?}");
        }
    }

    #[test]
    fn test_render_uncaught() {
        let failure = crate::catch(|| {
            crate::hold_with_context(false, format_args!("ctx {}", 1));
        })
        .unwrap_err();
        let Location { file, line, column } = failure.location().clone();
        assert_eq!(file, file!());

        let expected = format!(
            "thread 'main' panicked at {file}:{line}:{column}:\n\
             must(ctx 1) |{file}:{line}| failed with: condition did not hold true"
        );
        assert_eq!(render_uncaught(&failure, "main"), expected);
    }

    #[test]
    fn test_boundary_depth_nests() {
        assert!(!inside_boundary());
        {
            let _outer = BoundaryGuard::enter();
            assert!(inside_boundary());
            {
                let _inner = BoundaryGuard::enter();
                assert!(inside_boundary());
            }
            assert!(inside_boundary());
        }
        assert!(!inside_boundary());
    }

    #[test]
    fn test_boundary_depth_survives_unwind() {
        let result = std::panic::catch_unwind::<_, ()>(|| {
            let _guard = BoundaryGuard::enter();
            std::panic::resume_unwind(Box::new(()));
        });
        assert!(result.is_err());
        assert!(!inside_boundary());
    }
}
